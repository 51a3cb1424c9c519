// ---------------------------------------------------------------------------
// Two-click distance measurement
// ---------------------------------------------------------------------------

/// A pixel position inside the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl PixelPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Map an offset from the image's top-left corner to a pixel, or `None`
    /// when it falls outside a `width` × `height` image.
    pub fn from_offset(dx: f32, dy: f32, width: u32, height: u32) -> Option<Self> {
        if !(dx >= 0.0 && dy >= 0.0) {
            return None;
        }
        let (x, y) = (dx.floor() as u32, dy.floor() as u32);
        (x < width && y < height).then_some(Self::new(x, y))
    }

    pub fn distance_to(&self, other: &PixelPoint) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy)
    }
}

/// Message shown once a pair of points is complete.
pub fn describe_distance(distance: f64) -> String {
    format!("The distance between the points is {distance:.2} pixels")
}

/// Collects clicked points; every second point completes a measurement.
///
/// `pending` never holds more than one point between calls. The last
/// completed pair is kept in `finished` so its markers stay visible until
/// the result has been acknowledged.
#[derive(Debug, Clone, Default)]
pub struct Measurement {
    pending: Vec<PixelPoint>,
    finished: Option<(PixelPoint, PixelPoint)>,
}

impl Measurement {
    /// Record a click. Returns the distance when this click completes a pair.
    pub fn record(&mut self, point: PixelPoint) -> Option<f64> {
        self.finished = None;
        self.pending.push(point);
        if self.pending.len() < 2 {
            return None;
        }
        let (a, b) = (self.pending[0], self.pending[1]);
        self.pending.clear();
        self.finished = Some((a, b));
        Some(a.distance_to(&b))
    }

    /// Points still waiting for a partner.
    pub fn pending(&self) -> &[PixelPoint] {
        &self.pending
    }

    /// Every point that should currently carry a marker.
    pub fn markers(&self) -> Vec<PixelPoint> {
        let mut out = self.pending.clone();
        if let Some((a, b)) = self.finished {
            out.push(a);
            out.push(b);
        }
        out
    }

    /// Drop the markers of the completed pair.
    pub fn acknowledge(&mut self) {
        self.finished = None;
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.finished = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = PixelPoint::new(10, 20);
        let b = PixelPoint::new(13, 24);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(describe_distance(5.0), "The distance between the points is 5.00 pixels");
        assert_eq!(
            describe_distance(PixelPoint::new(0, 0).distance_to(&PixelPoint::new(1, 1))),
            "The distance between the points is 1.41 pixels"
        );
    }

    #[test]
    fn second_click_completes_and_clears() {
        let mut m = Measurement::default();
        assert_eq!(m.record(PixelPoint::new(0, 0)), None);
        assert_eq!(m.pending().len(), 1);

        assert_eq!(m.record(PixelPoint::new(6, 8)), Some(10.0));
        assert!(m.pending().is_empty());
        assert_eq!(m.markers().len(), 2);

        m.acknowledge();
        assert!(m.markers().is_empty());
    }

    #[test]
    fn next_click_starts_new_pair() {
        let mut m = Measurement::default();
        m.record(PixelPoint::new(1, 1));
        m.record(PixelPoint::new(2, 2));

        assert_eq!(m.record(PixelPoint::new(5, 5)), None);
        assert_eq!(m.markers(), vec![PixelPoint::new(5, 5)]);
    }

    #[test]
    fn offsets_outside_image_are_ignored() {
        assert_eq!(PixelPoint::from_offset(3.7, 0.2, 10, 10), Some(PixelPoint::new(3, 0)));
        assert_eq!(PixelPoint::from_offset(-0.5, 2.0, 10, 10), None);
        assert_eq!(PixelPoint::from_offset(10.0, 2.0, 10, 10), None);
        assert_eq!(PixelPoint::from_offset(2.0, f32::NAN, 10, 10), None);
    }
}
