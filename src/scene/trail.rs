use super::Point3;

/// Fixed-length ring of the most recently rendered positions, newest first.
/// Purely cosmetic: the renderer draws it as a fading line behind the marker.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<Point3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Shifts every slot back one and writes the new point at the front. The
    /// oldest point falls off once the trail is full.
    pub fn record(&mut self, point: Point3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop();
        }
        self.points.insert(0, point);
    }

    pub fn front(&self) -> Option<&Point3> {
        self.points.first()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
