pub struct Config {
    /// Suppresses error messages on stderr.
    ///
    /// The exit status is still reported.
    pub quiet: bool,
    /// Enables ANSI colours in terminal output.
    pub color: bool,
    /// Lowers the default log filter from `warn` to `debug`.
    pub verbose: bool,
}

