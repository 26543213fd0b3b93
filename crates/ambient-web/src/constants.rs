// DOM wiring names used by the web frontend.

// Auto-mount target looked up by `start()`
pub const AUTO_MOUNT_ID: &str = "ambient-root";

// Elements created inside the container
pub const CANVAS_CLASS: &str = "ambient-canvas";
pub const CAPTION_LAYER_CLASS: &str = "ambient-captions";
pub const CAPTION_CLASS: &str = "ambient-chat-message";

// Container attributes overriding the default config
pub const ATTR_LIGHT_INTENSITY: &str = "data-light-intensity";
pub const ATTR_FOG_DENSITY: &str = "data-fog-density";
pub const ATTR_PARTICLE_COUNT: &str = "data-particle-count";

// Candidate elements for the proximity scan
pub const REGION_SELECTOR: &str = "body *";

pub const CANVAS_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;z-index:20";
pub const CAPTION_LAYER_STYLE: &str = "position:absolute;inset:0;pointer-events:none;z-index:25;overflow:visible";
pub const CAPTION_STYLE: &str = "position:absolute;transform:translate(-50%,-50%);pointer-events:none;white-space:nowrap;\
font:13px system-ui;color:#f5f7ff;background:rgba(10,14,24,0.8);padding:6px 10px;border-radius:6px";
