#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    symptom_checker_lib::run()
}
