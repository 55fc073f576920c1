//! Seed generators for the catalog tables.
//!
//! Generators never touch storage: they turn an injected random source into
//! rows, and the [`Runner`](crate::Runner) inserts them.

use fake::{
    Fake,
    faker::lorem::raw::{Sentence, Word},
    locales::PT_BR,
};
use rand::{Rng, RngCore};
use sea_orm::{Value, prelude::Decimal};

/// Category names seeded by [`CategorySeed`], in insertion order.
pub const CATEGORY_NAMES: [&str; 5] = ["Eletrônicos", "Livros", "Roupas", "Alimentos", "Móveis"];

/// Rows generated by [`ProductSeed::default`].
pub const PRODUCT_COUNT: usize = 100;

/// Words in every generated product description.
pub const DESCRIPTION_WORDS: usize = 6;

/// Price bounds in cents, inclusive.
const PRICE_CENTS: std::ops::RangeInclusive<i64> = 100..=10_000;

/// One row to insert: column names paired with their values, in order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Row(Vec<(&'static str, Value)>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.0.push((column, value.into()));
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0
            .iter()
            .find_map(|(name, value)| (*name == column).then_some(value))
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    pub fn into_parts(self) -> (Vec<&'static str>, Vec<Value>) {
        self.0.into_iter().unzip()
    }
}

/// Produces the rows a migration seeds its table with.
pub trait SeedGenerator: Send + Sync {
    fn rows(&self, rng: &mut dyn RngCore) -> Vec<Row>;
}

/// The five fixed categories.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategorySeed;

impl SeedGenerator for CategorySeed {
    fn rows(&self, _rng: &mut dyn RngCore) -> Vec<Row> {
        CATEGORY_NAMES
            .iter()
            .map(|name| Row::new().with("name", *name))
            .collect()
    }
}

/// Random products spread over the seeded categories.
#[derive(Clone, Copy, Debug)]
pub struct ProductSeed {
    count: usize,
}

impl Default for ProductSeed {
    fn default() -> Self {
        Self {
            count: PRODUCT_COUNT,
        }
    }
}

impl ProductSeed {
    pub fn with_count(count: usize) -> Self {
        Self { count }
    }

    fn product(rng: &mut dyn RngCore) -> Row {
        let word: String = Word(PT_BR).fake_with_rng(rng);
        let description: String =
            Sentence(PT_BR, DESCRIPTION_WORDS..DESCRIPTION_WORDS + 1).fake_with_rng(rng);
        let price = Decimal::new(rng.gen_range(PRICE_CENTS), 2);
        let category_id = rng.gen_range(1..=CATEGORY_NAMES.len() as i32);

        Row::new()
            .with("name", capitalize(&word))
            .with("price", price)
            .with("description", description)
            .with("category_id", category_id)
            .with("used", rng.gen_bool(0.5))
    }
}

impl SeedGenerator for ProductSeed {
    fn rows(&self, rng: &mut dyn RngCore) -> Vec<Row> {
        (0..self.count).map(|_| Self::product(rng)).collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn string(row: &Row, column: &str) -> String {
        match row.get(column) {
            Some(Value::String(Some(s))) => s.to_string(),
            other => panic!("{column} is not a string: {other:?}"),
        }
    }

    #[test]
    fn category_seed_yields_fixed_names_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let names: Vec<String> = CategorySeed
            .rows(&mut rng)
            .iter()
            .map(|row| string(row, "name"))
            .collect();

        assert_eq!(
            names,
            ["Eletrônicos", "Livros", "Roupas", "Alimentos", "Móveis"]
        );
    }

    #[test]
    fn product_seed_rows_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows = ProductSeed::default().rows(&mut rng);
        assert_eq!(rows.len(), 100);

        for row in &rows {
            let name = string(row, "name");
            assert!(!name.is_empty() && name.chars().count() <= 255);
            let first = name.chars().next().unwrap();
            assert!(!first.is_lowercase(), "{name} is not capitalized");

            let description = string(row, "description");
            assert_eq!(description.split_whitespace().count(), DESCRIPTION_WORDS);

            let Some(Value::Decimal(Some(price))) = row.get("price") else {
                panic!("price is not a decimal");
            };
            assert_eq!(price.scale(), 2);
            assert!(**price >= Decimal::new(100, 2) && **price <= Decimal::new(10_000, 2));

            let Some(Value::Int(Some(category_id))) = row.get("category_id") else {
                panic!("category_id is not an integer");
            };
            assert!((1..=5).contains(category_id));

            assert!(matches!(row.get("used"), Some(Value::Bool(Some(_)))));
        }
    }

    #[test]
    fn product_seed_honours_custom_count() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(ProductSeed::with_count(7).rows(&mut rng).len(), 7);
        assert!(ProductSeed::with_count(0).rows(&mut rng).is_empty());
    }

    #[test]
    fn capitalize_handles_multibyte_first_letter() {
        assert_eq!(capitalize("ébano"), "Ébano");
        assert_eq!(capitalize("livro"), "Livro");
        assert_eq!(capitalize(""), "");
    }
}
