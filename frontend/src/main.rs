//! Entry point for the WASM application

pub fn main() {
    face_match_frontend::mount();
}
