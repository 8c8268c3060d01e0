use crate::{
    model::{Table, Tables, TablesError},
    statement::segment::TableSegment,
};

///
/// TableFiller
///
/// Folds parsed table references into a statement's `Tables`.
///

pub struct TableFiller;

impl TableFiller {
    /// Add one table reference.
    ///
    /// The owner schema is checked before the table is recorded, so a
    /// rejected reference leaves `tables` untouched.
    pub fn fill(segment: &TableSegment, tables: &mut Tables) -> Result<(), TablesError> {
        if let Some(owner) = segment.owner.as_deref() {
            tables.set_schema(owner)?;
        }
        tables.add(Table::new(segment.name.clone(), segment.alias.clone()));

        Ok(())
    }

    /// Add every reference in order, stopping at the first schema conflict.
    pub fn fill_all<'a, I>(segments: I, tables: &mut Tables) -> Result<(), TablesError>
    where
        I: IntoIterator<Item = &'a TableSegment>,
    {
        for segment in segments {
            Self::fill(segment, tables)?;
        }

        Ok(())
    }
}
