//! Helpers for Debug impls.

use std::fmt::{self, Debug};

/// Number of values per row in the alternate (`{:#?}`) format.
const ROW_LEN: usize = 8;

/// The live elements of a stack, bottom first.
pub(crate) struct DebugElements<'a>(pub &'a [i32]);

impl Debug for DebugElements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.debug_list().entries(self.0).finish();
        }

        // Similar to unix `hexdump`: rows of values, each prefixed by the
        // index of its first slot.
        writeln!(f)?;
        for (i, row) in self.0.chunks(ROW_LEN).enumerate() {
            write!(f, "{:04}: ", i * ROW_LEN)?;
            write_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write a row of right-aligned values.
pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, row: &[i32]) -> fmt::Result {
    let Some((first, rest)) = row.split_first() else {
        return Ok(());
    };
    write!(f, "{first:>11}")?;
    for value in rest {
        write!(f, " {value:>11}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact() {
        let s = format!("{:?}", DebugElements(&[1, -2, 3]));
        assert_eq!(s, "[1, -2, 3]");
    }

    #[test]
    fn rows() {
        let values: Vec<i32> = (0..10).collect();
        let s = format!("{:#?}", DebugElements(&values));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("0000: "));
        assert!(lines[2].starts_with("0008: "));
        assert!(lines[2].ends_with("          9"));
    }
}
