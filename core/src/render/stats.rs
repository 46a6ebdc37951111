//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Collects and accumulates rendering statistics and performance data.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of draw calls issued.
    pub calls: usize,
    /// Triangles submitted / triangles that covered at least one pixel.
    pub prims: Throughput,
    /// Pixels tested / pixels covered.
    pub frags: Throughput,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Count of items going in and out of a rendering stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// Count of items submitted.
    pub i: usize,
    /// Count of items output.
    pub o: usize,
}

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Stats` instance that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to `self.time`.
    ///
    /// Equivalent to [`Stats::new`] if the `std` feature is not enabled.
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer and records the elapsed time to `self.time`.
    ///
    /// No-op if the timer was not running, or if the `std` feature
    /// is not enabled.
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map_or(self.time, |st| st.elapsed()),
            #[cfg(feature = "std")]
            start: None,
            ..self
        }
    }

    /// Returns the average number of pixels covered per second,
    /// or `None` if no time has been recorded.
    pub fn frags_per_sec(&self) -> Option<f32> {
        let secs = self.time.as_secs_f32();
        (secs > 0.0).then(|| self.frags.o as f32 / secs)
    }
}

impl Display for Stats {
    /// Formats `self` as a table, one statistic per row. Throughputs are
    /// shown as percentages of items output if the `#` flag is given.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(16);
        writeln!(f, " STATS  {:>w$}", "TOTAL")?;
        writeln!(f, "{:─<1$}", "", w + 9)?;
        writeln!(f, " time   {:>w$}", human_time(self.time))?;
        writeln!(f, " calls  {:>w$}", self.calls)?;
        for (lbl, io) in [("prims", self.prims), ("frags", self.frags)] {
            if f.alternate() {
                writeln!(f, " {lbl:6} {io:#w$}")?;
            } else {
                writeln!(f, " {lbl:6} {io:w$}")?;
            }
        }
        Ok(())
    }
}

impl Display for Throughput {
    /// Formats `self` as "in / out", or with the `#` flag,
    /// as the percentage of items output.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(10);
        let s = match (f.alternate(), self.i) {
            (true, 0) => "--".into(),
            (true, i) => format!("{:.1}%", 100.0 * self.o as f32 / i as f32),
            (false, _) => {
                format!("{} / {}", human_num(self.i), human_num(self.o))
            }
        };
        write!(f, "{s:>w$}")
    }
}

impl AddAssign for Stats {
    /// Appends the stats of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.calls += other.calls;
        self.prims += other.prims;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

/// Formats `n` in five characters or so, with a k or M suffix if large.
fn human_num(n: usize) -> String {
    const UNITS: [(usize, char); 2] = [(1_000_000, 'M'), (1_000, 'k')];
    match UNITS.iter().find(|&&(u, _)| n >= u) {
        None => format!("{n:5}"),
        Some(&(u, sfx)) if n < 100 * u => {
            format!("{:4.1}{sfx}", n as f32 / u as f32)
        }
        Some(&(u, sfx)) => format!("{:4}{sfx}", n / u),
    }
}

fn human_time(d: Duration) -> String {
    let us = d.as_secs_f32() * 1e6;
    if us < 1e3 {
        format!("{us:4.1}μs")
    } else if us < 1e6 {
        format!("{:4.1}ms", us / 1e3)
    } else {
        format!("{:.1}s", us / 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throughput_display() {
        let io = Throughput { i: 1234, o: 56 };
        assert_eq!(format!("{io}"), " 1.2k /    56");
        assert_eq!(format!("{io:#}"), "      4.5%");
        assert_eq!(format!("{:#}", Throughput::default()), "        --");
    }

    #[test]
    fn stats_display() {
        let stats = Stats {
            time: Duration::from_millis(12),
            calls: 3,
            prims: Throughput { i: 3, o: 2 },
            frags: Throughput { i: 4321, o: 1234 },
            ..Stats::default()
        };
        assert_eq!(
            format!("{stats}"),
            " \
 STATS             TOTAL
─────────────────────────
 time             12.0ms
 calls                 3
 prims         3 /     2
 frags      4.3k /  1.2k
"
        );
        assert_eq!(
            format!("{stats:#}"),
            " \
 STATS             TOTAL
─────────────────────────
 time             12.0ms
 calls                 3
 prims             66.7%
 frags             28.6%
"
        );
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Stats::new();
        let one = Stats {
            calls: 1,
            prims: Throughput { i: 1, o: 1 },
            frags: Throughput { i: 100, o: 40 },
            ..Stats::default()
        };
        total += one.clone();
        total += one;
        assert_eq!(total.calls, 2);
        assert_eq!(total.prims, Throughput { i: 2, o: 2 });
        assert_eq!(total.frags, Throughput { i: 200, o: 80 });
    }

    #[test]
    fn frags_per_sec() {
        let mut stats = Stats::new();
        assert_eq!(stats.frags_per_sec(), None);
        stats.time = Duration::from_millis(500);
        stats.frags.o = 1000;
        assert_eq!(stats.frags_per_sec(), Some(2000.0));
    }

    #[test]
    fn human_nums() {
        assert_eq!(human_num(10), "   10");
        assert_eq!(human_num(1_234), " 1.2k");
        assert_eq!(human_num(123_456), " 123k");
        assert_eq!(human_num(1_234_567), " 1.2M");
        assert_eq!(human_num(123_456_789), " 123M");
    }

    #[test]
    fn human_times() {
        assert_eq!(human_time(Duration::from_micros(123)), "123.0μs");
        assert_eq!(human_time(Duration::from_millis(123)), "123.0ms");
        assert_eq!(human_time(Duration::from_millis(1234)), "1.2s");
    }
}
