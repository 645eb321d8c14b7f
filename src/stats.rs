use std::time::{Duration, Instant};

/// How often a report becomes available
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, alive: usize);
    /// Forget the recorded generations, e.g. after the engine was reset
    fn restart(&mut self, alive: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Self::Str;
}

/// Keeps the figures shown on the dashboard
pub struct SimpleRecord {
    generation: u64,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            generation: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, alive: usize) {
        self.generation += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn restart(&mut self, alive: usize) {
        self.generation = 0;
        self.alive = alive;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> Self::Str {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s generation:{} alive:{}",
            gens_per_sec, self.generation, self.alive
        )
    }
}

/// Records the time and population of every generation for a CSV export
pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))
    }

    fn write_to<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i, delta, alive)?;
        }
        out.flush()
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, alive));
        self.inner.record(alive);
    }

    fn restart(&mut self, alive: usize) {
        self.data.clear();
        self.last = Instant::now();
        self.inner.restart(alive);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> Self::Str {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(alive: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(alive))
        } else {
            Self::Simple(SimpleRecord::new(alive))
        }
    }

    /// Writes the recorded generations, if this records them at all
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            Self::Simple(_) => Err(std::io::Error::other(
                "statistics were not recorded for csv output",
            )),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.record(alive),
            Self::Simple(r) => r.record(alive),
        }
    }
    fn restart(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.restart(alive),
            Self::Simple(r) => r.restart(alive),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}

/// The status lines shown below the grid in console mode
pub struct Dashboard {
    pub speed: u8,
    pub paused: bool,
    pub fast_forward: bool,
    pub report: String,
}
impl std::fmt::Display for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "speed:{:<3} {}", self.speed, self.report)?;
        if self.paused {
            write!(f, " [paused]")?;
        } else if self.fast_forward {
            write!(f, " [fast]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_generations() {
        let mut stats = SimpleRecord::new(5);
        stats.record(4);
        stats.record(3);

        let report = stats.report();
        assert!(report.ends_with("generation:2 alive:3"), "{report}");
    }

    #[test]
    fn restart_resets_generation() {
        let mut stats = SwitchRecorder::new(5, false);
        stats.record(4);
        stats.restart(0);
        stats.record(1);

        assert!(stats.report().ends_with("generation:1 alive:1"));
    }

    #[test]
    fn csv_has_a_row_per_generation() {
        let mut stats = CsvRecord::new(3);
        stats.record(3);
        stats.record(2);

        let mut out = Vec::new();
        stats.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "gen,delta_t,alive");
        assert!(lines[2].starts_with("1,") && lines[2].ends_with(",2"));
    }

    #[test]
    fn simple_recorder_cannot_save() {
        let stats = SwitchRecorder::new(0, false);

        assert!(stats.save("unused.csv").is_err());
    }

    #[test]
    fn dashboard_marks_pause() {
        let dash = Dashboard {
            speed: 50,
            paused: true,
            fast_forward: true,
            report: "1.00gen/s generation:1 alive:1".into(),
        };

        assert_eq!(
            dash.to_string(),
            "speed:50  1.00gen/s generation:1 alive:1 [paused]"
        );
    }

    #[test]
    fn dashboard_marks_fast_forward() {
        let mut dash = Dashboard {
            speed: 100,
            paused: false,
            fast_forward: true,
            report: String::new(),
        };
        assert!(dash.to_string().ends_with(" [fast]"));

        dash.fast_forward = false;
        assert_eq!(dash.to_string(), "speed:100 ");
    }
}
