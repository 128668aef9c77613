//! Earnings trend series drawn above the table.

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
}

impl Series {
    /// `(x, y)` points with x as the category index.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &y)| (i as f64, y))
            .collect()
    }
}

/// Category axis plus the series plotted over it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl Default for TrendChart {
    fn default() -> Self {
        Self {
            categories: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            series: vec![
                Series {
                    name: "LR2-A-Pool",
                    kind: SeriesKind::Line,
                    values: vec![45303.0, 14043.0, 10052.0, 40541.0, 15624.0, 86565.0],
                },
                Series {
                    name: "HAFNIA LEO",
                    kind: SeriesKind::Scatter,
                    values: vec![55303.0, 24043.0, 30052.0, 10541.0, 55624.0, 26565.0],
                },
            ],
        }
    }
}

impl TrendChart {
    /// Largest value across all series, 0 when there are none. The y axis
    /// starts at 0.
    pub fn y_max(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}
