// DOM wiring for the background element.

pub const CONTAINER_ID: &str = "bg";
pub const CANVAS_CLASS: &str = "backgroundcanvas";

// Back to front; also used as the z-index order inside the container.
pub const LAYER_NAMES: [&str; 3] = ["backdrop", "glow", "streak"];

// The container sits behind the page and never takes pointer input.
pub const CONTAINER_STYLE: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;z-index:-1;pointer-events:none;overflow:hidden";
pub const CANVAS_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%";
