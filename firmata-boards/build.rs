//! Build script for firmata-boards
//!
//! - Reads the compiled-in servo count from `FIRMATA_MAX_SERVOS`
//! - Rejects more than one board identity feature

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Firmata addresses at most 128 pins, so no board can have more servo slots
const SERVO_LIMIT: u32 = 128;

const BOARD_FEATURES: [&str; 4] = [
    "CARGO_FEATURE_ATMEGA328P",
    "CARGO_FEATURE_ATMEGA328P_DIP",
    "CARGO_FEATURE_ATMEGA2560",
    "CARGO_FEATURE_RP2040_PICO",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FIRMATA_MAX_SERVOS");

    check_board_features();
    write_servo_count();
}

/// Fail early with a readable message when several boards are selected
fn check_board_features() {
    let selected: Vec<&str> = BOARD_FEATURES
        .iter()
        .copied()
        .filter(|feature| env::var_os(feature).is_some())
        .collect();

    if selected.len() > 1 {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: more than one board feature enabled                      ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ║                                                                  ║\n\
            ║  Disable default features when selecting another board.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            selected
                .iter()
                .map(|f| format!("║  • {:<62} ║", f.trim_start_matches("CARGO_FEATURE_")))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Generate `MAX_SERVOS` into OUT_DIR
fn write_servo_count() {
    let max_servos = match env::var("FIRMATA_MAX_SERVOS") {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n <= SERVO_LIMIT => n,
            _ => panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: invalid FIRMATA_MAX_SERVOS                               ║\n\
                ║                                                                  ║\n\
                ║  Value: {:<56} ║\n\
                ║  Expected an integer between 0 and {:<29} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                raw, SERVO_LIMIT
            ),
        },
        // No Servo library linked in
        Err(_) => 0,
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let mut f = File::create(out_dir.join("servos.rs")).expect("create servos.rs");
    writeln!(
        f,
        "/// Servo slots compiled in (`FIRMATA_MAX_SERVOS`, 0 = no servo support)\n\
         pub const MAX_SERVOS: u8 = {};",
        max_servos
    )
    .expect("write servos.rs");
}
