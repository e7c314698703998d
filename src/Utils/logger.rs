use crate::quadrature::quadrature_rule::QuadratureRule;
use csv::Writer;
use simplelog::*;
use std::fs::File;
use std::io;
use std::path::Path;

/// Terminal logger, plus a file logger if `log_file` is given.
/// Returns false if a global logger was already installed (the call is then a no-op).
pub fn init_logging(level: LevelFilter, log_file: Option<&str>) -> bool {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(name) = log_file {
        match File::create(name) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", name, e),
        }
    }
    CombinedLogger::init(loggers).is_ok()
}

/// writes the rule as csv: header `weight,x[,y[,z]]`, one row per point
pub fn save_rule_to_csv<const D: usize, P: AsRef<Path>>(
    rule: &QuadratureRule<D>,
    filename: P,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    let mut headers = vec!["weight".to_string()];
    headers.extend(["x", "y", "z"].iter().take(D).map(|s| s.to_string()));
    writer.write_record(&headers)?;

    for (weight, point) in rule.iter() {
        let mut row_data = vec![weight.to_string()];
        row_data.extend(point.iter().map(|val| val.to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}
