pub mod bodies;
pub mod trajectory;

/// Time step and evolution time (seconds) used by the orbital tests.
pub fn simulation_properties() -> (f64, f64) {
    let time_step: f64 = 0.1*orrery::constants::DAY;
    let time_evolution: f64 = 365.*orrery::constants::DAY;
    (time_step, time_evolution)
}

pub fn get_data_dirname() -> String {
    format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"))
}

/// Scratch file path unique to this test process.
pub fn get_scratch_path(test_name: &str, extension: &str) -> std::path::PathBuf {
    let filename = format!("orrery-{}-{}.{}", test_name, std::process::id(), extension);
    let path = std::env::temp_dir().join(filename);
    let _ = std::fs::remove_file(&path);
    path
}
