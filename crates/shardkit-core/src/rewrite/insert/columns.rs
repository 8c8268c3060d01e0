use serde::Serialize;

///
/// InsertColumns
///
/// Resolved column set shared read-only by every unit of one statement:
/// logical columns in declared order, then derived columns in the order
/// they were added.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct InsertColumns {
    regular: Vec<String>,
    derived: Vec<String>,
    // (logical, cipher) pairs for encrypted columns
    ciphers: Vec<(String, String)>,
}

impl InsertColumns {
    pub(crate) const fn new(regular: Vec<String>) -> Self {
        Self {
            regular,
            derived: Vec::new(),
            ciphers: Vec::new(),
        }
    }

    #[must_use]
    pub fn regular_column_names(&self) -> &[String] {
        &self.regular
    }

    #[must_use]
    pub fn derived_column_names(&self) -> &[String] {
        &self.derived
    }

    /// Logical columns followed by derived columns.
    #[must_use]
    pub fn all_column_names(&self) -> Vec<&str> {
        self.regular
            .iter()
            .chain(&self.derived)
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.regular
            .iter()
            .chain(&self.derived)
            .any(|name| name.eq_ignore_ascii_case(column))
    }

    /// Physical column the value of `logical` is written to, if it is encrypted.
    #[must_use]
    pub fn cipher_column(&self, logical: &str) -> Option<&str> {
        self.ciphers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(logical))
            .map(|(_, cipher)| cipher.as_str())
    }

    pub(crate) fn add_derived(&mut self, column: impl Into<String>) {
        self.derived.push(column.into());
    }

    pub(crate) fn set_cipher(&mut self, logical: impl Into<String>, cipher: impl Into<String>) {
        self.ciphers.push((logical.into(), cipher.into()));
    }
}
