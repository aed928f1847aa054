use ::std::fs;
use ::std::io::{self, Write};
use ::std::path::Path;

use crate::args::DataType;

/// `Total <unit>: <count>.` where the unit follows the data type.
pub fn total_line(count: usize, data_type: DataType) -> String {
    let unit = match data_type {
        DataType::Long | DataType::Unspecified => "numbers",
        DataType::Line => "lines",
        DataType::Word => "words",
    };
    format!("Total {unit}: {count}.")
}

/// Writes the report to `output_file`, or to stdout when there is none.
///
/// The file receives `total` and `payload` back to back. Stdout gets each on
/// its own line.
pub fn write_report(
    total: &str,
    payload: &str,
    output_file: Option<&Path>,
) -> io::Result<()> {
    match output_file {
        Some(path) => fs::write(path, format!("{total}{payload}")),
        None => emit(&mut io::stdout().lock(), total, payload),
    }
}

pub fn emit<W: Write>(out: &mut W, total: &str, payload: &str) -> io::Result<()> {
    writeln!(out, "{total}")?;
    writeln!(out, "{payload}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_units() {
        assert_eq!(total_line(3, DataType::Long), "Total numbers: 3.");
        assert_eq!(total_line(0, DataType::Unspecified), "Total numbers: 0.");
        assert_eq!(total_line(2, DataType::Line), "Total lines: 2.");
        assert_eq!(total_line(5, DataType::Word), "Total words: 5.");
    }

    #[test]
    fn stdout_puts_each_part_on_its_own_line() {
        let mut out = Vec::new();
        emit(&mut out, "Total words: 3.", "b: 1 time(s), 33%\na: 2 time(s), 66%\n")
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total words: 3.\nb: 1 time(s), 33%\na: 2 time(s), 66%\n\n"
        );
    }

    #[test]
    fn file_gets_parts_back_to_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "stale content that is longer").unwrap();

        write_report("Total numbers: 3.", "Sorted sortedData: 1 2 3", Some(&path))
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Total numbers: 3.Sorted sortedData: 1 2 3"
        );
    }
}
