pub const RENDER_WIDTH: i32 = 1920;           // Width of the stage render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the stage render texture
pub const FPS: u32 = 60;                      // Target frames per second

pub const VIEW_ZOOM: f32 = 1.15;              // Extra zoom applied on top of the "cover" fit
pub const MOBILE_BREAKPOINT: f32 = 768.0;     // Viewports narrower than this use the mobile text metrics
pub const VIEWPORT_EDGE: f32 = 2.0;           // Pointer closer than this to the right/bottom edge counts as outside

pub const CURSOR_CHASE_DURATION: f32 = 0.5;   // Cursor displacement scale tween (seconds)
pub const TILT_CHASE_DURATION: f32 = 2.0;     // Text tilt tween (seconds)
pub const SWIPE_RELAX_DURATION: f32 = 0.5;    // Background scale relax after a released swipe (seconds)

pub const TITLE_TILT: (f32, f32) = (0.1, 0.2);     // Kinetic multipliers for the title offset
pub const SUBTITLE_TILT: (f32, f32) = (0.25, 0.2); // Kinetic multipliers for the subtitle offset
