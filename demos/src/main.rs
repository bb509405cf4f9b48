// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::fs::File;
use std::io::Read;

use cursorjson::{write_structure, Cursor};

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: {} file.json", args[0]);
        std::process::exit(1);
    }
    let path = &args[1];
    let mut data = Vec::new();
    let mut f = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: Unable to open file '{}': {}", path, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = f.read_to_end(&mut data) {
        eprintln!("Error: Unable to read file '{}': {}", path, e);
        std::process::exit(1);
    }
    log::info!("Read {} bytes from {}", data.len(), path);

    let mut cursor = Cursor::new_from_slice(&data);
    let mut out = String::new();
    match write_structure(&mut cursor, &mut out) {
        Ok(Ok(())) => {
            print!("{}", out);
        }
        Ok(Err(e)) => {
            print!("{}", out);
            log::debug!("Walk of {} failed at byte {}: {}", path, cursor.position(), e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Unable to format structure: {}", e);
            std::process::exit(1);
        }
    }
}
