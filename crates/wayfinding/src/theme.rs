//! Fixed palette of the floor map. Dark slate floor, cyan highlight accents,
//! emerald/rose waypoint tones.

use foundation::Paint;

pub const FLOOR: Paint = Paint::rgb(11, 22, 45);

pub const ZONE_STROKE: Paint = Paint::rgba(71, 85, 105, 0.8);
pub const LABEL_LIGHT: Paint = Paint::rgb(226, 232, 240);

pub const AISLE_ACTIVE: Paint = Paint::rgba(34, 211, 238, 0.75);
pub const AISLE_IDLE: Paint = Paint::rgba(71, 85, 105, 0.55);
pub const AISLE_LABEL_ACTIVE: Paint = Paint::rgb(2, 19, 26);
pub const AISLE_LABEL_IDLE: Paint = Paint::rgb(15, 23, 42);

pub const SHELF_ACTIVE_FILL: Paint = Paint::rgba(34, 211, 238, 0.9);
pub const SHELF_IDLE_FILL: Paint = Paint::rgba(15, 23, 42, 0.92);
pub const SHELF_ACTIVE_STROKE: Paint = Paint::rgba(165, 243, 252, 0.9);
pub const SHELF_IDLE_STROKE: Paint = Paint::rgba(148, 163, 184, 0.85);
pub const LEADER_ACTIVE: Paint = Paint::rgba(165, 243, 252, 0.9);
pub const LEADER_IDLE: Paint = Paint::rgba(148, 163, 184, 0.75);

pub const PATH_STROKE: Paint = Paint::rgba(94, 234, 212, 0.55);

pub const ENTRANCE_FILL: Paint = Paint::rgba(16, 185, 129, 0.18);
pub const ENTRANCE_STROKE: Paint = Paint::rgba(52, 211, 153, 0.8);
pub const ENTRANCE_TEXT: Paint = Paint::rgb(190, 242, 100);
pub const EXIT_FILL: Paint = Paint::rgba(244, 63, 94, 0.18);
pub const EXIT_STROKE: Paint = Paint::rgba(251, 113, 133, 0.8);
pub const EXIT_TEXT: Paint = Paint::rgb(254, 205, 211);

pub const LEGEND_BOX: Paint = Paint::rgba(15, 23, 42, 0.78);
pub const LEGEND_STROKE: Paint = Paint::rgba(71, 85, 105, 0.6);
pub const LEGEND_TEXT: Paint = Paint::rgb(203, 213, 245);
pub const LEGEND_DOT: Paint = Paint::rgb(34, 211, 238);
pub const LEGEND_LANE: Paint = Paint::rgba(100, 116, 139, 0.9);
