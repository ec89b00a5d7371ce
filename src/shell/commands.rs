use crate::geo::models::Coordinate;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Press(Coordinate),
    Clear,
    Locate(Option<Coordinate>),
    Search(String),
    Map,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let command = match name {
            "" => return Ok(None),
            "press" => Command::Press(parse_coordinate(rest)?),
            "clear" => Command::Clear,
            "locate" if rest == "none" => Command::Locate(None),
            "locate" => Command::Locate(Some(parse_coordinate(rest)?)),
            "search" => Command::Search(rest.to_string()),
            "map" => Command::Map,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command `{other}`")),
        };
        Ok(Some(command))
    }
}

fn parse_coordinate(args: &str) -> Result<Coordinate, String> {
    let parts = args.split_whitespace().collect::<Vec<_>>();
    let [latitude, longitude] = parts.as_slice() else {
        return Err(String::from("expected `<lat> <lng>`"));
    };
    let latitude = latitude
        .parse::<f64>()
        .ok()
        .filter(|latitude| latitude.is_finite())
        .ok_or_else(|| format!("`{latitude}` is not a latitude"))?;
    let longitude = longitude
        .parse::<f64>()
        .ok()
        .filter(|longitude| longitude.is_finite())
        .ok_or_else(|| format!("`{longitude}` is not a longitude"))?;
    Ok(Coordinate::new(latitude, longitude))
}
