pub const REGISTER_TITLE: &str = "Register spot";
pub const REGISTER_MESSAGE: &str = "Enter a message to leave at this place.";
pub const REGISTER_PLACEHOLDER: &str = "Message";
pub const CANCEL_ANSWER: &str = "/cancel";
pub const DELETE_ALL_QUESTION: &str = "Delete all pins? This cannot be undone. [y/N]";
pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Commands:
  press <lat> <lng>    drop a pin at a coordinate
  clear                delete every pin
  locate <lat> <lng>   report a location fix (`locate none` for a missing fix)
  search <text>        look up places around the visible region
  map                  show the visible region and annotations
  help                 show this message
  quit                 leave";
