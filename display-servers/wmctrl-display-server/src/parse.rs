//! Parsers for the text output of `wmctrl` and `xdpyinfo`.
use autoplace_core::{ScreenResolution, WindowId, WindowRecord};

/// Parses `wmctrl -lp`: `<id> <desktop> <pid> <host> <title...>`.
///
/// Lines that do not start with a window id and a pid are ignored.
pub fn parse_window_list(output: &str) -> Vec<WindowRecord> {
    output.lines().filter_map(parse_window_line).collect()
}

fn parse_window_line(line: &str) -> Option<WindowRecord> {
    let mut rest = line.trim_start();
    let mut fields = [""; 4];
    for field in &mut fields {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        *field = &rest[..end];
        rest = rest[end..].trim_start();
    }
    let [id, _desktop, pid, _host] = fields;

    let window_id = id.parse::<WindowId>().ok()?;
    let owner_pid = pid.parse::<u32>().ok()?;
    Some(WindowRecord::new(window_id, owner_pid, rest.trim_end()))
}

/// Finds the `dimensions:    1920x1080 pixels (508x285 millimeters)` line of `xdpyinfo`.
pub fn parse_dimensions(output: &str) -> Option<ScreenResolution> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("dimensions:"))
        .find_map(|dims| dims.split_whitespace().next()?.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wmctrl_listing() {
        let output = "\
0x01000003 -1 1422   laptop xfce4-panel
0x03a00007  0 20051  laptop user@laptop: ~/src  (bash)
0x04400001  1 0      N/A Untitled
";
        let windows = parse_window_list(output);
        assert_eq!(
            windows,
            vec![
                WindowRecord::new(WindowId(0x0100_0003), 1422, "xfce4-panel"),
                WindowRecord::new(WindowId(0x03a0_0007), 20051, "user@laptop: ~/src  (bash)"),
                WindowRecord::new(WindowId(0x0440_0001), 0, "Untitled"),
            ]
        );
    }

    #[test]
    fn window_without_title_is_kept() {
        let windows = parse_window_list("0x00c00001  0 812    laptop\n");
        assert_eq!(windows, vec![WindowRecord::new(WindowId(0x00c0_0001), 812, "")]);
    }

    #[test]
    fn garbage_lines_are_skipped() {
        assert!(parse_window_list("Cannot get client list properties.\n\n").is_empty());
    }

    #[test]
    fn parses_xdpyinfo_dimensions() {
        let output = "\
name of display:    :0
screen #0:
  dimensions:    3840x1080 pixels (1016x285 millimeters)
  resolution:    96x96 dots per inch
";
        assert_eq!(
            parse_dimensions(output),
            Some(ScreenResolution::new(3840, 1080))
        );
        assert_eq!(parse_dimensions("screen #0:\n"), None);
    }
}
