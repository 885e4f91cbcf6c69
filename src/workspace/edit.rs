use crate::error::{AppError, AppResult};

/// Which neighbour an insertion sticks to when several share an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InsertSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub offset: usize,
    pub text: String,
    pub side: InsertSide,
}

/// Planned insertions against an immutable snapshot of one file.
///
/// Offsets always refer to the snapshot, never to partially edited text.
/// At a single offset the left insertions come first, then the right ones,
/// each group in call order.
#[derive(Debug, Clone)]
pub struct EditSession {
    path: String,
    snapshot: String,
    insertions: Vec<Insertion>,
}

impl EditSession {
    pub fn new(path: &str, snapshot: String) -> Self {
        Self {
            path: path.to_string(),
            snapshot,
            insertions: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn insertions(&self) -> &[Insertion] {
        &self.insertions
    }

    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    pub fn insert(&mut self, offset: usize, text: &str, side: InsertSide) -> AppResult<()> {
        if offset > self.snapshot.len() || !self.snapshot.is_char_boundary(offset) {
            return Err(AppError::InvalidEdit(format!(
                "offset {} is not a valid position in {} ({} bytes)",
                offset,
                self.path,
                self.snapshot.len()
            )));
        }

        self.insertions.push(Insertion {
            offset,
            text: text.to_string(),
            side,
        });
        Ok(())
    }

    pub fn insert_left(&mut self, offset: usize, text: &str) -> AppResult<()> {
        self.insert(offset, text, InsertSide::Left)
    }

    pub fn insert_right(&mut self, offset: usize, text: &str) -> AppResult<()> {
        self.insert(offset, text, InsertSide::Right)
    }

    /// Render the snapshot with every planned insertion applied
    pub fn apply(&self) -> String {
        let mut ordered: Vec<&Insertion> = self.insertions.iter().collect();
        // Stable sort keeps call order within the same offset and side
        ordered.sort_by_key(|insertion| (insertion.offset, insertion.side));

        let extra: usize = ordered.iter().map(|insertion| insertion.text.len()).sum();
        let mut output = String::with_capacity(self.snapshot.len() + extra);
        let mut cursor = 0;

        for insertion in ordered {
            output.push_str(&self.snapshot[cursor..insertion.offset]);
            output.push_str(&insertion.text);
            cursor = insertion.offset;
        }
        output.push_str(&self.snapshot[cursor..]);

        output
    }
}
