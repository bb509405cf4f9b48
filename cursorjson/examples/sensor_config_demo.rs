// Example reading a configuration document of a known shape into fixed buffers

use cursorjson::{Cursor, ParseError, ValueType};

const CONFIG: &str = r#"{
    "name": "imu-0",
    "rate": 400,
    "gain": [1.0, 0.98, 1.02],
    "calibrated": true,
    "comment": {"author": "bench", "notes": ["ignored", 1, null]}
}"#;

#[derive(Debug, Default)]
struct SensorConfig {
    name: [u8; 16],
    name_len: usize,
    rate: u32,
    gain: [f32; 3],
    calibrated: bool,
}

fn read_config(json: &str) -> Result<SensorConfig, ParseError> {
    let mut config = SensorConfig::default();
    let mut key = [0u8; 16];
    let mut cursor = Cursor::new(json);

    cursor.object_start()?;
    loop {
        match cursor.parse_key_bytes(&mut key)? {
            b"name" => config.name_len = cursor.parse_string_bytes(&mut config.name)?.len(),
            b"rate" => {
                config.rate = cursor
                    .parse_number_literal()?
                    .parse()
                    .map_err(|_| ParseError::UnableToParseNumber)?;
            }
            b"gain" => {
                cursor.array_start()?;
                for (i, slot) in config.gain.iter_mut().enumerate() {
                    if i > 0 {
                        cursor.comma()?;
                    }
                    *slot = cursor.parse_number()?;
                }
                cursor.array_end()?;
            }
            b"calibrated" => config.calibrated = cursor.parse_bool()?,
            other => {
                let kind = cursor.peek_type()?;
                println!(
                    "skipping {} member {:?}",
                    kind,
                    core::str::from_utf8(other).unwrap_or("?")
                );
                if kind == ValueType::Object {
                    cursor.walk_value(|kind, depth| println!("  {}{}", "  ".repeat(depth), kind))?;
                } else {
                    cursor.skip_value()?;
                }
            }
        }
        if cursor.comma().is_err() {
            break;
        }
    }
    cursor.object_end()?;
    Ok(config)
}

fn main() -> Result<(), ParseError> {
    let config = read_config(CONFIG)?;
    println!(
        "name: {}",
        core::str::from_utf8(&config.name[..config.name_len]).unwrap_or("?")
    );
    println!("rate: {} Hz", config.rate);
    println!("gain: {:?}", config.gain);
    println!("calibrated: {}", config.calibrated);

    let broken = CONFIG.replace("\"rate\": 400,", "\"rate\": 400");
    match read_config(&broken) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("broken document rejected: {}", e),
    }
    Ok(())
}
