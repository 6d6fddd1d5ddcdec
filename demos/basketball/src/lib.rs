use wasm_bindgen::prelude::*;

mod court;

hoop_web::export_simulation!(court::config(), "basketball");
