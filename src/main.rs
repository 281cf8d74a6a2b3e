#[cfg(target_arch = "wasm32")]
pub fn main() {
    creativehub::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
