//! DevOps Learning Adventure page script
//!
//! Scroll reveal and tip of the day, compiled to WebAssembly and loaded by
//! `index.html`.

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    adventure_ui::boot();
}
