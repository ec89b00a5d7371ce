pub const PINS_KEY: &str = "pins";
