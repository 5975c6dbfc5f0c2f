//! Plotly figures built from the aggregated tables
//!
//! Figures are plain Plotly JSON (`data`, `layout`, optional `frames`) rendered into the report
//! with `Plotly.newPlot`, so no plotting happens on our side.

use serde_json::{json, Value};

use crate::models::{ChartData, CombinedRow, CourseRecord};

/// Padding added around the data when fixing the axes of animated charts
const AXIS_PADDING: f64 = 0.2;
/// Largest marker diameter, in pixels
const MAX_MARKER_SIZE: f64 = 20.0;
const HISTOGRAM_BINS: u32 = 30;
const TREEMAP_SCALE: [&str; 3] = ["#FF0000", "#000000", "#00FF00"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Rating,
    Difficulty,
    Workload,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Rating, Metric::Difficulty, Metric::Workload];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Rating => "Rating",
            Metric::Difficulty => "Difficulty",
            Metric::Workload => "Workload",
        }
    }

    fn of_course(self, course: &CourseRecord) -> f64 {
        match self {
            Metric::Rating => course.rating,
            Metric::Difficulty => course.difficulty,
            Metric::Workload => course.workload,
        }
    }

    fn of_row(self, row: &CombinedRow) -> Option<f64> {
        match self {
            Metric::Rating => row.rating,
            Metric::Difficulty => row.difficulty,
            Metric::Workload => row.workload,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub id: String,
    pub data: Value,
    pub layout: Value,
    pub frames: Option<Value>,
}

impl Figure {
    /// `<div>` plus the inline script drawing into it. Expects plotly.js to be loaded already.
    pub fn to_html(&self) -> String {
        let mut script = format!(
            "Plotly.newPlot({id}, {data}, {layout}, {{\"responsive\": true}})",
            id = script_json(&json!(self.id)),
            data = script_json(&self.data),
            layout = script_json(&self.layout),
        );
        if let Some(frames) = &self.frames {
            script.push_str(&format!(
                ".then(function () {{ Plotly.addFrames({id}, {frames}); }})",
                id = script_json(&json!(self.id)),
                frames = script_json(frames),
            ));
        }
        format!(
            "<div id=\"{id}\" class=\"plotly-graph-div\" style=\"width:100%;\"></div>\n\
             <script type=\"text/javascript\">{script};</script>\n",
            id = html_escape::encode_double_quoted_attribute(&self.id),
        )
    }
}

/// Serializes JSON so it cannot close the surrounding `<script>` element
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// All figures of one report, grouped by report section
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub overview: Vec<Figure>,
    pub by_semester: Vec<Figure>,
    pub distributions: Vec<Figure>,
}

impl ChartSet {
    /// Builds the fixed set of figures. `subject` prefixes titles, e.g. "OMSCS".
    pub fn build(data: &ChartData, subject: &str) -> Self {
        let mut ids = (1..).map(|n| format!("chart-{n}"));
        let mut next_id = move || ids.next().unwrap_or_default();
        let rating_title = format!(
            "{subject} Course Rating and Difficulty (size = Review Count, color = Workload)"
        );
        let workload_title = format!(
            "{subject} Course Workload and Difficulty (size = Review Count, color = Rating)"
        );

        let overview = vec![
            scatter(
                next_id(),
                &data.courses,
                Metric::Rating,
                Metric::Workload,
                &rating_title,
            ),
            scatter(
                next_id(),
                &data.courses,
                Metric::Workload,
                Metric::Rating,
                &workload_title,
            ),
            treemap(
                next_id(),
                &data.courses,
                Metric::Rating,
                Metric::Difficulty,
                &format!("{subject} Course Rating"),
            ),
            treemap(
                next_id(),
                &data.courses,
                Metric::Difficulty,
                Metric::Rating,
                &format!("{subject} Course Difficulty"),
            ),
        ];
        let by_semester = vec![
            animated_scatter(
                next_id(),
                &data.by_semester,
                &data.courses,
                Metric::Rating,
                Metric::Workload,
                &rating_title,
            ),
            animated_scatter(
                next_id(),
                &data.by_semester,
                &data.courses,
                Metric::Workload,
                Metric::Rating,
                &workload_title,
            ),
        ];
        let histograms = [Metric::Workload, Metric::Rating, Metric::Difficulty];
        let mut distributions: Vec<Figure> = histograms
            .into_iter()
            .map(|metric| histogram(next_id(), &data.courses, metric))
            .collect();
        distributions.push(correlation_heatmap(next_id(), &data.courses));

        ChartSet {
            overview,
            by_semester,
            distributions,
        }
    }

    pub fn figure_count(&self) -> usize {
        self.overview.len() + self.by_semester.len() + self.distributions.len()
    }
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Smallest and largest finite value
pub fn value_range(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some([v, v]),
            Some([min, max]) => Some([f64::min(min, v), f64::max(max, v)]),
        })
}

/// Data min and max widened by [`AXIS_PADDING`] on each side
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    value_range(values).map(|[min, max]| [min - AXIS_PADDING, max + AXIS_PADDING])
}

/// Pearson correlation, `None` when either side has no variance
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mean_x = mean(xs[..n].iter().copied())?;
    let mean_y = mean(ys[..n].iter().copied())?;
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

/// Rounds to three decimals and prints it the way the labels always looked (`4.0`, `3.125`)
pub fn round3(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

fn size_ref(counts: impl IntoIterator<Item = u32>) -> f64 {
    let max = counts.into_iter().max().unwrap_or(1).max(1);
    2.0 * f64::from(max) / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)
}

/// Dashed guide lines at the mean of difficulty (vertical) and of `y` (horizontal)
fn mean_lines(courses: &[CourseRecord], y: Metric) -> (Value, Value) {
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();
    if let Some(x_mean) = mean(courses.iter().map(|c| c.difficulty)) {
        shapes.push(json!({
            "type": "line", "xref": "x", "yref": "paper",
            "x0": x_mean, "x1": x_mean, "y0": 0, "y1": 1,
            "line": {"width": 0.5},
        }));
        annotations.push(json!({
            "x": x_mean, "xref": "x", "y": 1, "yref": "paper",
            "text": "Mean Difficulty", "showarrow": false, "xanchor": "left", "yanchor": "top",
        }));
    }
    if let Some(y_mean) = mean(courses.iter().map(|c| y.of_course(c))) {
        shapes.push(json!({
            "type": "line", "xref": "paper", "yref": "y",
            "x0": 0, "x1": 1, "y0": y_mean, "y1": y_mean,
            "line": {"width": 0.5},
        }));
        annotations.push(json!({
            "x": 1, "xref": "paper", "y": y_mean, "yref": "y",
            "text": format!("Mean {}", y.label()), "showarrow": false,
            "xanchor": "right", "yanchor": "bottom",
        }));
    }
    (Value::Array(shapes), Value::Array(annotations))
}

fn scatter_layout(title: &str, y: Metric, courses: &[CourseRecord]) -> Value {
    let (shapes, annotations) = mean_lines(courses, y);
    json!({
        "title": {"text": title},
        "xaxis": {"title": {"text": "Difficulty"}},
        "yaxis": {"title": {"text": y.label()}},
        "height": 800,
        "font": {"size": 10},
        "shapes": shapes,
        "annotations": annotations,
    })
}

/// All-time difficulty against `y`, sized by review count and colored by `color`
pub fn scatter(
    id: String,
    courses: &[CourseRecord],
    y: Metric,
    color: Metric,
    title: &str,
) -> Figure {
    let trace = json!({
        "type": "scatter",
        "mode": "markers+text",
        "x": courses.iter().map(|c| c.difficulty).collect::<Vec<_>>(),
        "y": courses.iter().map(|c| y.of_course(c)).collect::<Vec<_>>(),
        "text": courses.iter().map(|c| c.tag.as_str()).collect::<Vec<_>>(),
        "textposition": "top center",
        "customdata": courses.iter().map(|c| json!([c.name, c.review_count])).collect::<Vec<_>>(),
        "hovertemplate": format!(
            "<b>%{{text}}</b><br>Difficulty=%{{x}}<br>{}=%{{y}}<br>name=%{{customdata[0]}}<br>reviewCount=%{{customdata[1]}}<br>{}=%{{marker.color}}<extra></extra>",
            y.label(),
            color.label(),
        ),
        "marker": {
            "size": courses.iter().map(|c| c.review_count).collect::<Vec<_>>(),
            "sizemode": "area",
            "sizeref": size_ref(courses.iter().map(|c| c.review_count)),
            "color": courses.iter().map(|c| color.of_course(c)).collect::<Vec<_>>(),
            "colorscale": "Plasma",
            "showscale": true,
            "colorbar": {"title": {"text": color.label()}},
        },
    });
    Figure {
        id,
        data: json!([trace]),
        layout: scatter_layout(title, y, courses),
        frames: None,
    }
}

fn semester_trace(
    rows: &[&CombinedRow],
    y: Metric,
    color: Metric,
    size_ref: f64,
    color_range: Option<[f64; 2]>,
) -> Value {
    let mut marker = json!({
        "size": rows.iter().map(|r| r.review_count.unwrap_or(0)).collect::<Vec<_>>(),
        "sizemode": "area",
        "sizeref": size_ref,
        "color": rows.iter().map(|r| color.of_row(r)).collect::<Vec<_>>(),
        "colorscale": "Plasma",
        "showscale": true,
        "colorbar": {"title": {"text": color.label()}},
    });
    if let Some([cmin, cmax]) = color_range {
        marker["cmin"] = json!(cmin);
        marker["cmax"] = json!(cmax);
    }
    json!({
        "type": "scatter",
        "mode": "markers+text",
        "ids": rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "x": rows.iter().map(|r| r.difficulty).collect::<Vec<_>>(),
        "y": rows.iter().map(|r| y.of_row(r)).collect::<Vec<_>>(),
        "text": rows.iter().map(|r| r.tag.as_deref().unwrap_or_default()).collect::<Vec<_>>(),
        "textposition": "top center",
        "customdata": rows.iter().map(|r| json!([r.name, r.review_count])).collect::<Vec<_>>(),
        "hovertemplate": format!(
            "<b>%{{text}}</b><br>Difficulty=%{{x}}<br>{}=%{{y}}<br>name=%{{customdata[0]}}<br>reviewCount=%{{customdata[1]}}<extra></extra>",
            y.label(),
        ),
        "marker": marker,
    })
}

/// Per-semester difficulty against `y`, one animation frame per semester
///
/// Axes are fixed to the padded range of the whole table so frames are comparable. Guide lines
/// show the all-time means.
pub fn animated_scatter(
    id: String,
    rows: &[CombinedRow],
    courses: &[CourseRecord],
    y: Metric,
    color: Metric,
    title: &str,
) -> Figure {
    let mut semesters: Vec<String> = Vec::new();
    for row in rows {
        if let Some(semester) = &row.semester {
            let label = semester.to_string();
            if !semesters.contains(&label) {
                semesters.push(label);
            }
        }
    }

    let size_ref = size_ref(rows.iter().filter_map(|r| r.review_count));
    let color_range = value_range(rows.iter().filter_map(|r| color.of_row(r)));

    let frames: Vec<Value> = semesters
        .iter()
        .map(|label| {
            let frame_rows: Vec<&CombinedRow> = rows
                .iter()
                .filter(|r| r.semester.as_ref().is_some_and(|s| s.to_string() == *label))
                .collect();
            json!({
                "name": label,
                "data": [semester_trace(&frame_rows, y, color, size_ref, color_range)],
            })
        })
        .collect();

    let data = frames
        .first()
        .map(|frame| frame["data"].clone())
        .unwrap_or_else(|| json!([]));

    let steps: Vec<Value> = semesters
        .iter()
        .map(|label| {
            json!({
                "label": label,
                "method": "animate",
                "args": [[label], {
                    "mode": "immediate",
                    "frame": {"duration": 0, "redraw": true},
                    "transition": {"duration": 0},
                }],
            })
        })
        .collect();

    let mut layout = scatter_layout(title, y, courses);
    if let Some(range) = padded_range(rows.iter().filter_map(|r| r.difficulty)) {
        layout["xaxis"]["range"] = json!(range);
    }
    if let Some(range) = padded_range(rows.iter().filter_map(|r| y.of_row(r))) {
        layout["yaxis"]["range"] = json!(range);
    }
    layout["sliders"] = json!([{
        "active": 0,
        "currentvalue": {"prefix": "semester="},
        "len": 0.9,
        "x": 0.1,
        "y": 0,
        "pad": {"b": 10, "t": 60},
        "steps": steps,
    }]);
    layout["updatemenus"] = json!([{
        "type": "buttons",
        "direction": "left",
        "showactive": false,
        "x": 0.1,
        "y": 0,
        "xanchor": "right",
        "yanchor": "top",
        "pad": {"r": 10, "t": 70},
        "buttons": [
            {
                "label": "&#9654;",
                "method": "animate",
                "args": [null, {
                    "mode": "immediate",
                    "fromcurrent": true,
                    "frame": {"duration": 500, "redraw": true},
                    "transition": {"duration": 500, "easing": "linear"},
                }],
            },
            {
                "label": "&#9724;",
                "method": "animate",
                "args": [[null], {
                    "mode": "immediate",
                    "fromcurrent": true,
                    "frame": {"duration": 0, "redraw": true},
                    "transition": {"duration": 0},
                }],
            },
        ],
    }]);

    Figure {
        id,
        data,
        layout,
        frames: Some(Value::Array(frames)),
    }
}

/// Courses grouped by department, boxes sized by review count and colored by `metric`
///
/// Department boxes take the review-weighted mean of their courses' colors.
pub fn treemap(
    id: String,
    courses: &[CourseRecord],
    metric: Metric,
    hover: Metric,
    root: &str,
) -> Figure {
    let mut ids = vec![root.to_string()];
    let mut labels = vec![root.to_string()];
    let mut parents = vec![String::new()];
    let mut values = vec![0u64];
    let mut colors = vec![None];
    let mut customdata = vec![json!([null, null])];

    let mut departments: Vec<&str> = courses.iter().map(|c| c.department.as_str()).collect();
    departments.sort_unstable();
    departments.dedup();

    let mut root_weighted = 0.0;
    for department in departments {
        let members: Vec<&CourseRecord> = courses
            .iter()
            .filter(|c| c.department == department)
            .collect();
        let department_id = format!("{root}/{department}");
        let total: u64 = members.iter().map(|c| u64::from(c.review_count)).sum();
        let weighted: f64 = members
            .iter()
            .map(|c| metric.of_course(c) * f64::from(c.review_count))
            .sum();
        root_weighted += weighted;

        ids.push(department_id.clone());
        labels.push(department.to_string());
        parents.push(root.to_string());
        values.push(total);
        colors.push((total > 0).then(|| weighted / total as f64));
        customdata.push(json!([null, null]));
        values[0] += total;

        for course in members {
            let label = format!("{}<br><br>{}", course.tag, round3(metric.of_course(course)));
            ids.push(format!("{department_id}/{label}"));
            labels.push(label);
            parents.push(department_id.clone());
            values.push(u64::from(course.review_count));
            colors.push(Some(metric.of_course(course)));
            customdata.push(json!([course.name, hover.of_course(course)]));
        }
    }
    colors[0] = (values[0] > 0).then(|| root_weighted / values[0] as f64);

    let trace = json!({
        "type": "treemap",
        "branchvalues": "total",
        "ids": ids,
        "labels": labels,
        "parents": parents,
        "values": values,
        "customdata": customdata,
        "textposition": "middle center",
        "hovertemplate": format!(
            "%{{label}}<br>reviewCount=%{{value}}<br>name=%{{customdata[0]}}<br>{}=%{{customdata[1]}}<br>{}=%{{color}}<extra></extra>",
            hover.label().to_lowercase(),
            metric.label().to_lowercase(),
        ),
        "marker": {
            "colors": colors,
            "colorscale": [
                [0.0, TREEMAP_SCALE[0]],
                [0.5, TREEMAP_SCALE[1]],
                [1.0, TREEMAP_SCALE[2]],
            ],
            "showscale": true,
            "colorbar": {"title": {"text": metric.label().to_lowercase()}},
        },
    });
    Figure {
        id,
        data: json!([trace]),
        layout: json!({
            "margin": {"t": 30, "l": 10, "r": 10, "b": 10},
            "font": {"size": 20},
        }),
        frames: None,
    }
}

pub fn histogram(id: String, courses: &[CourseRecord], metric: Metric) -> Figure {
    let trace = json!({
        "type": "histogram",
        "x": courses.iter().map(|c| metric.of_course(c)).collect::<Vec<_>>(),
        "nbinsx": HISTOGRAM_BINS,
        "name": metric.label().to_lowercase(),
    });
    Figure {
        id,
        data: json!([trace]),
        layout: json!({
            "title": {"text": format!("{} Distribution", metric.label())},
            "xaxis": {"title": {"text": metric.label().to_lowercase()}},
            "yaxis": {"title": {"text": "count"}},
            "width": 800,
        }),
        frames: None,
    }
}

/// Pairwise Pearson correlation of rating, difficulty and workload
pub fn correlation_matrix(courses: &[CourseRecord]) -> Vec<Vec<Option<f64>>> {
    let columns: Vec<Vec<f64>> = Metric::ALL
        .iter()
        .map(|metric| courses.iter().map(|c| metric.of_course(c)).collect())
        .collect();
    columns
        .iter()
        .map(|xs| columns.iter().map(|ys| pearson(xs, ys)).collect())
        .collect()
}

pub fn correlation_heatmap(id: String, courses: &[CourseRecord]) -> Figure {
    let labels: Vec<String> = Metric::ALL.iter().map(|m| m.label().to_lowercase()).collect();
    let trace = json!({
        "type": "heatmap",
        "z": correlation_matrix(courses),
        "x": labels,
        "y": labels,
        "texttemplate": "%{z}",
        "colorscale": "Plasma",
        "hovertemplate": "x: %{x}<br>y: %{y}<br>color: %{z}<extra></extra>",
    });
    Figure {
        id,
        data: json!([trace]),
        layout: json!({
            "title": {"text": "Correlation"},
            "xaxis": {"constrain": "domain", "scaleanchor": "y"},
            "yaxis": {"autorange": "reversed", "constrain": "domain"},
        }),
        frames: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semester::Semester;

    fn course(
        name: &str,
        department: &str,
        tag: &str,
        rating: f64,
        difficulty: f64,
        workload: f64,
    ) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            code: format!("{department}-6000"),
            department: department.to_string(),
            tag: tag.to_string(),
            description: None,
            review_count: 10,
            rating,
            difficulty,
            workload,
        }
    }

    fn row(name: &str, semester: &str, difficulty: f64, rating: f64) -> CombinedRow {
        CombinedRow {
            name: name.to_string(),
            semester: Some(Semester::parse(semester).unwrap()),
            tag: None,
            department: None,
            code: None,
            description: None,
            review_count: Some(3),
            rating: Some(rating),
            difficulty: Some(difficulty),
            workload: Some(10.0),
        }
    }

    #[test]
    fn ranges_are_padded_by_a_fifth() {
        let [min, max] = padded_range([1.0, 4.0, 2.5]).unwrap();
        assert!((min - 0.8).abs() < 1e-9);
        assert!((max - 4.2).abs() < 1e-9);
        assert_eq!(padded_range(std::iter::empty()), None);
    }

    #[test]
    fn correlation_of_linear_columns() {
        assert!((pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&[1.0, 1.0], &[1.0, 2.0]), None);

        let courses = [
            course("A", "CS", "A", 1.0, 2.0, 5.0),
            course("B", "CS", "B", 2.0, 4.0, 5.0),
            course("C", "CS", "C", 3.0, 6.0, 5.0),
        ];
        let matrix = correlation_matrix(&courses);
        assert!((matrix[0][1].unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(matrix[2][2], None);
    }

    #[test]
    fn treemap_labels_round_to_three_places() {
        assert_eq!(round3(4.0), "4.0");
        assert_eq!(round3(3.12345), "3.123");
        let courses = [
            course("Graduate Algorithms", "CS", "GA", 3.12345, 4.0, 20.0),
            course("Data Analytics", "ISYE", "DA", 4.0, 2.0, 8.0),
        ];
        let figure = treemap(
            "t".to_string(),
            &courses,
            Metric::Rating,
            Metric::Difficulty,
            "OMSCS Course Rating",
        );
        let trace = &figure.data[0];
        assert_eq!(
            trace["labels"],
            json!([
                "OMSCS Course Rating",
                "CS",
                "GA<br><br>3.123",
                "ISYE",
                "DA<br><br>4.0"
            ])
        );
        assert_eq!(trace["parents"][2], json!("OMSCS Course Rating/CS"));
        assert_eq!(trace["values"][0], json!(20));
    }

    #[test]
    fn animated_scatter_has_one_frame_per_semester() {
        let rows = [
            row("Graduate Algorithms", "Spring 2021", 4.0, 3.0),
            row("Computer Networks", "Spring 2021", 2.0, 4.0),
            row("Graduate Algorithms", "Fall 2021", 5.0, 2.0),
        ];
        let figure = animated_scatter(
            "s".to_string(),
            &rows,
            &[],
            Metric::Rating,
            Metric::Workload,
            "t",
        );
        let frames = figure.frames.unwrap();
        assert_eq!(frames.as_array().unwrap().len(), 2);
        assert_eq!(frames[0]["name"], json!("Spring 2021"));
        assert_eq!(
            frames[0]["data"][0]["ids"],
            json!(["Graduate Algorithms", "Computer Networks"])
        );
        assert_eq!(figure.data, frames[0]["data"]);

        let x_range = figure.layout["xaxis"]["range"].as_array().unwrap();
        assert!((x_range[0].as_f64().unwrap() - 1.8).abs() < 1e-9);
        assert!((x_range[1].as_f64().unwrap() - 5.2).abs() < 1e-9);
    }

    #[test]
    fn html_cannot_break_out_of_script() {
        let figure = Figure {
            id: "chart-1".to_string(),
            data: json!([{"text": ["</script><b>"]}]),
            layout: json!({}),
            frames: None,
        };
        let html = figure.to_html();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("Plotly.newPlot(\"chart-1\""));
    }

    #[test]
    fn chart_set_is_complete() {
        let data = ChartData {
            courses: vec![course("Graduate Algorithms", "CS", "GA", 3.0, 4.0, 20.0)],
            ..ChartData::default()
        };
        let charts = ChartSet::build(&data, "OMSCS");
        assert_eq!(charts.overview.len(), 4);
        assert_eq!(charts.by_semester.len(), 2);
        assert_eq!(charts.distributions.len(), 4);
        assert_eq!(charts.figure_count(), 10);
        assert_eq!(charts.distributions[3].id, "chart-10");
    }
}
