use crate::error::Error;
use crate::simulator::{Pid, Process};

// Parse a workload file
//
// One process per line, either `id arrival burst` or `arrival burst`. In the
// second form the id is the position of the line among the process lines.
// Blank lines and `#` comments are skipped.
pub fn read_workload(stream: &[u8]) -> Result<Vec<Process>, Error> {
    // Read bytes to string and remove trailing spaces
    let string = match std::str::from_utf8(stream) {
        Ok(content) => content.trim_end(),
        Err(_) => return Err(Error::Utf8Error),
    };

    let mut processes: Vec<Process> = vec![];

    for (i, line) in string.lines().enumerate() {
        let row = i + 1;

        // Drop comments
        let line = match line.split_once('#') {
            Some((content, _)) => content,
            None => line,
        };
        let fields = line.split_whitespace().collect::<Vec<&str>>();

        // Ignore empty lines
        if fields.is_empty() {
            continue;
        }

        let process = match fields[..] {
            [id, arrival, burst] => {
                Process::new(parse_field(row, id)?, parse_field(row, arrival)?, parse_field(row, burst)?)
            }
            [arrival, burst] => {
                Process::new(next_id(row, processes.len())?, parse_field(row, arrival)?, parse_field(row, burst)?)
            }
            _ => {
                return Err(Error::InvalidNumberFields(
                    row,
                    fields.iter().map(|s| s.to_string()).collect(),
                ))
            }
        };

        processes.push(process);
    }

    Ok(processes)
}

// Ids for `arrival burst` lines count up from 0
fn next_id(row: usize, count: usize) -> Result<Pid, Error> {
    match Pid::try_from(count) {
        Ok(id) => Ok(id),
        Err(_) => Err(Error::TooManyProcesses(row)),
    }
}

fn parse_field<T: std::str::FromStr>(row: usize, field: &str) -> Result<T, Error> {
    match field.parse::<T>() {
        Ok(value) => Ok(value),
        Err(_) => Err(Error::ParseIntError(row, field.to_string())),
    }
}
