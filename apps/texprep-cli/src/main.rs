use std::path::Path;

use texprep_core::{resize_in_place, ResizePolicy};
use texprep_report::StdoutReporter;

const BASE_DIR: &str = "/home/ubuntu/wanwu_demo_site/client/public/images";
const TEXTURES: [&str; 2] = ["turtle_shell.png", "coin_texture.png"];

fn main() {
    let policy = ResizePolicy::default();
    let reporter = StdoutReporter;
    for name in TEXTURES {
        let path = Path::new(BASE_DIR).join(name);
        // Per-file failures are reported on stdout and absorbed; the
        // process always exits 0.
        let _ = resize_in_place(&path, &policy, &reporter);
    }
}
