use anyhow::{ensure, Result};

/// A named category and its candidate words
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

impl Category {
    pub fn new<N, W, I>(name: N, words: I) -> Self
    where
        N: Into<String>,
        W: Into<String>,
        I: IntoIterator<Item = W>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable table of categories to candidate words.
///
/// A `WordBank` is only obtainable through the validating [`WordBank::new`]
/// or the known-good [`WordBank::builtin`], so the engine can rely on every
/// category holding at least one non-empty, all-alphabetic uppercase word.
#[derive(Debug, Clone)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    /// Validate and normalize a set of categories into a bank.
    ///
    /// Words are uppercased here so the engine never has to re-normalize.
    /// Fails fast on a bank the game could not be played from.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        ensure!(!categories.is_empty(), "word bank has no categories");

        let mut normalized = Vec::with_capacity(categories.len());
        for category in categories {
            ensure!(!category.name.is_empty(), "category with an empty name");
            ensure!(
                !category.words.is_empty(),
                "category '{}' has no words",
                category.name
            );

            let mut words = Vec::with_capacity(category.words.len());
            for word in &category.words {
                ensure!(
                    !word.is_empty(),
                    "category '{}' contains an empty word",
                    category.name
                );
                ensure!(
                    word.chars().all(char::is_alphabetic),
                    "word '{}' in category '{}' contains non-letters",
                    word,
                    category.name
                );
                words.push(word.to_uppercase());
            }
            normalized.push(Category {
                name: category.name,
                words,
            });
        }

        Ok(Self {
            categories: normalized,
        })
    }

    /// The compiled-in bank the game ships with.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new(
                    "Fruits",
                    ["PINEAPPLE", "BANANA", "STRAWBERRY", "ORANGE", "GRAPE", "WATERMELON"],
                ),
                Category::new(
                    "Countries",
                    ["BRAZIL", "CANADA", "JAPAN", "ITALY", "FRANCE", "GERMANY"],
                ),
                Category::new(
                    "Animals",
                    ["ELEPHANT", "GIRAFFE", "TIGER", "LION", "ZEBRA", "RHINOCEROS"],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
