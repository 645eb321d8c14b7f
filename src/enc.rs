use crate::pos::Pos2;
use regex::Regex;
use std::sync::OnceLock;

pub trait PositionEncoder {
    fn encode(self, positions: &[Pos2]) -> String;
    fn decode(self, value: &str) -> Vec<Pos2>;
}

/// Maximum length of a data line written by the encoder
const MAX_LINE_LEN: usize = 70;

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: i32, c: char) {
        let append = match run {
            0 => return,
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+|[bo$!]").expect("valid run-length token pattern"))
}

/// Appends decimal `digits` to a run count, saturating instead of overflowing
fn push_digits(run: i32, digits: &str) -> i32 {
    digits.bytes().fold(run, |run, d| {
        run.saturating_mul(10).saturating_add(i32::from(d - b'0'))
    })
}

/// The run-length encoded pattern format
///
/// A file is a run of `#` comment lines, a header line naming the pattern
/// size (`x = 3, y = 3, rule = B3/S23`) and then data lines of
/// `[count](b|o|$)` tokens terminated by `!`.
#[derive(Debug, Clone, Default)]
pub struct RunLengthEncoded {
    name: Option<String>,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    fn encode_header(&self, size: Pos2) -> String {
        let mut header = String::new();
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        header.push_str(&format!("x = {}, y = {}, rule = B3/S23", size.x, size.y));
        header
    }

    /// Encodes row-major sorted cells relative to their bounding box
    fn encode_cells(&self, alive_cells: &[Pos2], tl: Pos2) -> String {
        let mut last = tl - Pos2 { x: 1, y: 0 };
        let mut alive_run = 0;
        let mut seq = RunEncoder::new(MAX_LINE_LEN);
        for pos in alive_cells {
            // if we're one ahead of the last, then only increment the run
            if last.y == pos.y && (last.x + 1) == pos.x {
                alive_run += 1;
                last = *pos;
                continue;
            }

            let lines_run = pos.y - last.y;
            let dead_run = match lines_run {
                0 => pos.x - last.x - 1,
                _ => pos.x - tl.x,
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(lines_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = *pos;
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }
}

impl PositionEncoder for RunLengthEncoded {
    fn encode(self, cells: &[Pos2]) -> String {
        let mut cells = cells.to_vec();
        cells.sort_unstable();
        cells.dedup();

        let (tl, size) = match (cells.iter().map(|p| p.x).min(), cells.first(), cells.last()) {
            (Some(min_x), Some(first), Some(last)) => {
                let max_x = cells.iter().map(|p| p.x).max().unwrap_or(min_x);
                let tl = Pos2 { x: min_x, y: first.y };
                let size = Pos2 {
                    x: max_x - min_x + 1,
                    y: last.y - first.y + 1,
                };
                (tl, size)
            }
            _ => (Pos2::zero(), Pos2::zero()),
        };

        format!(
            "{}\n{}\n",
            self.encode_header(size),
            self.encode_cells(&cells, tl)
        )
    }

    fn decode(self, value: &str) -> Vec<Pos2> {
        let mut alive = Vec::new();
        let mut cursor = Pos2::zero();
        let mut in_data = false;
        'lines_loop: for line in value.lines() {
            if line.starts_with('#') {
                continue;
            }
            // everything up to and including the size line is header
            if !in_data {
                in_data = line.contains('x') && line.contains('y');
                continue;
            }

            // anything that isn't a digit or a tag is skipped, a pending
            // count carries across it until the end of the line
            let mut run = 0;
            for token in token_regex().find_iter(line).map(|m| m.as_str()) {
                let count = match token {
                    "b" | "o" | "$" | "!" => std::mem::take(&mut run).max(1),
                    digits => {
                        run = push_digits(run, digits);
                        continue;
                    }
                };
                // a run leaving the representable plane ends the pattern
                match token {
                    "!" => break 'lines_loop,
                    "o" => {
                        let Some(end) = cursor.x.checked_add(count) else {
                            break 'lines_loop;
                        };
                        alive.extend((cursor.x..end).map(|x| Pos2 { x, y: cursor.y }));
                        cursor.x = end;
                    }
                    "b" => {
                        let Some(end) = cursor.x.checked_add(count) else {
                            break 'lines_loop;
                        };
                        cursor.x = end;
                    }
                    "$" => {
                        let Some(y) = cursor.y.checked_add(count) else {
                            break 'lines_loop;
                        };
                        cursor = Pos2 { x: 0, y };
                    }
                    _ => unreachable!("token pattern only matches digits, b, o, $ and !"),
                }
            }
        }

        alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    const GLIDER: &str = "#N Glider\n#C a comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";

    #[test]
    fn decodes_glider() {
        let cells = RunLengthEncoded::default().decode(GLIDER);

        assert_eq!(
            cells,
            vec![pos(1, 0), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)]
        );
    }

    #[test]
    fn ignores_data_before_header() {
        let cells = RunLengthEncoded::default().decode("ooo$ooo!\n");

        assert!(cells.is_empty());
    }

    #[test]
    fn stops_at_bang() {
        let text = "x = 0, y = 0\n2o!\n3o\n";
        let cells = RunLengthEncoded::default().decode(text);

        assert_eq!(cells, vec![pos(0, 0), pos(1, 0)]);
    }

    #[test]
    fn skips_unknown_characters_and_spans_lines() {
        let text = "x = 5, y = 4\no z3b o\n3$ q2o!";
        let cells = RunLengthEncoded::default().decode(text);

        assert_eq!(cells, vec![pos(0, 0), pos(4, 0), pos(0, 3), pos(1, 3)]);
    }

    #[test]
    fn zero_count_means_one() {
        let cells = RunLengthEncoded::default().decode("x = 2, y = 1\n0o0bo!");

        assert_eq!(cells, vec![pos(0, 0), pos(2, 0)]);
    }

    #[test]
    fn count_carries_over_skipped_characters() {
        let cells = RunLengthEncoded::default().decode("x = 12, y = 1\n1 x2b 2 o!");

        assert_eq!(cells, vec![pos(12, 0), pos(13, 0)]);
    }

    #[test]
    fn count_does_not_carry_to_next_line() {
        let cells = RunLengthEncoded::default().decode("x = 1, y = 1\n5\no!");

        assert_eq!(cells, vec![pos(0, 0)]);
    }

    #[test]
    fn overflowing_dead_runs_end_the_pattern() {
        let text = "x = 1, y = 1\n3o2000000000b2000000000bo!";
        let cells = RunLengthEncoded::default().decode(text);

        assert_eq!(cells, vec![pos(0, 0), pos(1, 0), pos(2, 0)]);
    }

    #[test]
    fn oversized_counts_saturate() {
        let text = "x = 1, y = 1\n99999999999999bo!";
        assert!(RunLengthEncoded::default().decode(text).is_empty());

        let rows = RunLengthEncoded::default().decode("x = 1, y = 1\n2147483647$o!");
        assert_eq!(rows, vec![pos(0, i32::MAX)]);
    }

    #[test]
    fn encodes_bounding_box() {
        let cells = vec![pos(12, 6), pos(11, 5), pos(10, 7), pos(11, 7), pos(12, 7)];
        let text = RunLengthEncoded::default().set_name("glider").encode(&cells);

        assert_eq!(text, "#N glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
    }

    #[test]
    fn encoded_pattern_decodes_to_same_shape() {
        let cells = vec![pos(0, 0), pos(5, 0), pos(2, 3), pos(3, 3)];
        let text = RunLengthEncoded::default().encode(&cells);

        assert_eq!(RunLengthEncoded::default().decode(&text), cells);
    }

    #[test]
    fn encodes_empty_pattern() {
        let text = RunLengthEncoded::default().encode(&[]);

        assert_eq!(text, "x = 0, y = 0, rule = B3/S23\n!\n");
    }
}
