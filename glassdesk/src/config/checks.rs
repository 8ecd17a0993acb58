use super::Config;
use tracing_subscriber::EnvFilter;

impl Config {
    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }

    /// Check the snapping and placement numbers for values that make the
    /// desktop unusable.
    pub fn check_geometry(&self, verbose: bool) -> bool {
        let mut problems = Vec::new();
        if self.grid_unit <= 0.0 {
            problems.push(format!("grid_unit must be positive, got {}", self.grid_unit));
        }
        for (name, value) in [
            ("taskbar_height", self.taskbar_height),
            ("padding", self.padding),
            ("snap_threshold", self.snap_threshold),
            ("cascade_jitter", self.cascade_jitter),
            ("docked_margin", self.docked_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!("{name} must be zero or more, got {value}"));
            }
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= self.taskbar_height {
            problems.push(format!(
                "viewport {}x{} leaves no room above the taskbar",
                self.viewport.width, self.viewport.height
            ));
        }
        if self.grid_unit > 0.0 && self.snap_threshold * 2.0 >= self.grid_unit {
            println!(
                "\x1b[1;93mWARN:\x1b[0m snap_threshold {} is at least half of grid_unit {}, every drop will land on the grid.",
                self.snap_threshold, self.grid_unit
            );
        }
        if verbose {
            println!("Checked geometry, {} problem(s).", problems.len());
        }
        for problem in &problems {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
        }
        problems.is_empty()
    }
}
