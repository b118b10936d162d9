/// Swatches offered next to the picker, in display order (two rows of twelve).
pub const PRESETS: [&str; 24] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", //
    "#FF4500", "#FF1493", "#9400D3", "#000000", "#FFFFFF", "#808080", //
    "#FFA500", "#FFD700", "#ADFF2F", "#32CD32", "#00FA9A", "#40E0D0", //
    "#1E90FF", "#000080", "#8A2BE2", "#FF69B4", "#F5F5DC", "#A52A2A",
];

pub const PRESETS_PER_ROW: usize = 12;
