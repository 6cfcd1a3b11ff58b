//! Translation of the editor's style sheet into egui visuals.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Margin, Visuals};
use std::ops::Range;

use text_editor_core::theme::{ThemeManager, FIND_HIGHLIGHT_BG};
use text_editor_core::{Rgb, ThemeMode, WidgetId, WidgetStyle};

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Window-wide visuals: the toolkit's base look for the mode, with menu
/// colors applied so dropdowns match the menu bar.
pub fn visuals(theme: &ThemeManager) -> Visuals {
    let mut visuals = match theme.mode() {
        ThemeMode::Dark => Visuals::dark(),
        ThemeMode::Light => Visuals::light(),
    };

    let menu = theme.style(WidgetId::MenuBar);
    let label = theme.style(WidgetId::Label);
    visuals.panel_fill = color(label.background);
    visuals.window_fill = color(menu.background);
    apply_menu_style(&mut visuals, &menu);
    visuals
}

pub fn apply_menu_style(visuals: &mut Visuals, style: &WidgetStyle) {
    visuals.override_text_color = Some(color(style.foreground));
    visuals.widgets.inactive.weak_bg_fill = color(style.background);
    visuals.widgets.hovered.weak_bg_fill = color(style.active_bg);
    visuals.widgets.hovered.fg_stroke.color = color(style.active_fg);
    visuals.widgets.active.weak_bg_fill = color(style.active_bg);
    visuals.widgets.active.fg_stroke.color = color(style.active_fg);
    visuals.widgets.open.weak_bg_fill = color(style.active_bg);
}

pub fn apply_text_area_style(visuals: &mut Visuals, style: &WidgetStyle) {
    visuals.extreme_bg_color = color(style.background);
    visuals.override_text_color = Some(color(style.foreground));
    visuals.selection.bg_fill = color(style.selection_bg);
    visuals.text_cursor.stroke.color = color(style.cursor);
}

pub fn panel_frame(style: &WidgetStyle) -> egui::Frame {
    egui::Frame::none()
        .fill(color(style.background))
        .inner_margin(Margin::symmetric(6.0, 3.0))
}

/// A stretch of text with uniform marks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub range: Range<usize>,
    pub highlighted: bool,
    pub selected: bool,
}

/// Splits `text` at every highlight and selection boundary. Ranges are in
/// bytes; ranges that are empty or do not fall on char boundaries of
/// `text` are ignored. Neighbouring runs with the same marks are merged.
pub fn highlight_runs(
    text: &str,
    highlights: &[Range<usize>],
    selection: Option<Range<usize>>,
) -> Vec<Run> {
    let valid = |range: &Range<usize>| {
        range.start < range.end
            && text.is_char_boundary(range.start)
            && text.is_char_boundary(range.end)
    };
    let highlights: Vec<&Range<usize>> = highlights
        .iter()
        .filter(|range| valid(*range))
        .collect();
    let selection = selection.filter(valid);

    let mut cuts = vec![0, text.len()];
    for range in highlights.iter().copied().chain(selection.as_ref()) {
        cuts.push(range.start);
        cuts.push(range.end);
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut runs: Vec<Run> = Vec::new();
    for pair in cuts.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let highlighted = highlights.iter().any(|range| range.contains(&start));
        let selected = selection.as_ref().is_some_and(|range| range.contains(&start));
        match runs.last_mut() {
            Some(last) if last.highlighted == highlighted && last.selected == selected => {
                last.range.end = end;
            }
            _ => runs.push(Run {
                range: start..end,
                highlighted,
                selected,
            }),
        }
    }
    if runs.is_empty() {
        runs.push(Run {
            range: 0..0,
            highlighted: false,
            selected: false,
        });
    }
    runs
}

/// Lays out the text area contents. Find matches get the yellow
/// background; selected text is drawn in the selection foreground over
/// the selection fill the text widget paints.
pub fn text_area_job(
    text: &str,
    highlights: &[Range<usize>],
    selection: Option<Range<usize>>,
    style: &WidgetStyle,
    wrap_width: f32,
) -> LayoutJob {
    let font_id = FontId::proportional(style.font_size);
    let mut job = LayoutJob::default();
    for run in highlight_runs(text, highlights, selection) {
        let mut format = TextFormat::simple(font_id.clone(), color(style.foreground));
        if run.selected {
            format.color = color(style.selection_fg);
        } else if run.highlighted {
            format.background = color(FIND_HIGHLIGHT_BG);
        }
        job.append(&text[run.range], 0.0, format);
    }
    job.wrap.max_width = wrap_width;
    job
}
