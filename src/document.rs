use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::shape::Shape;

/// Ordered list of every shape placed so far. Append-only.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Handle to the document shared by the console thread and the render loop
///
/// Every method takes the lock exactly once and releases it before
/// returning, so no caller ever holds it across a frame.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<Mutex<Document>>,
    #[cfg(test)]
    locks: Arc<std::sync::atomic::AtomicUsize>,
}

impl SharedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and return the new number of shapes
    pub fn add(&self, shape: Shape) -> usize {
        let mut doc = self.lock();
        doc.add(shape);
        log::debug!("Added {} (total {})", shape, doc.len());
        doc.len()
    }

    /// Copy of the current shape list in insertion order
    pub fn snapshot(&self) -> Vec<Shape> {
        self.lock().shapes().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Document> {
        #[cfg(test)]
        self.locks.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.inner.lock()
    }

    /// Number of times the lock was taken through this handle or its clones
    #[cfg(test)]
    pub(crate) fn lock_count(&self) -> usize {
        self.locks.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Point;
    use std::thread;

    #[test]
    fn test_insertion_order() {
        let doc = SharedDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.add(Shape::point(1, 1)), 1);
        assert_eq!(doc.add(Shape::line(Point::new(0, 0), Point::new(2, 2))), 2);
        assert_eq!(
            doc.snapshot(),
            vec![Shape::point(1, 1), Shape::line(Point::new(0, 0), Point::new(2, 2))]
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let doc = SharedDocument::new();
        doc.add(Shape::point(0, 0));
        let snapshot = doc.snapshot();
        doc.add(Shape::point(1, 1));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_each_operation_locks_once() {
        let doc = SharedDocument::new();
        let other = doc.clone();
        doc.add(Shape::point(0, 0));
        other.snapshot();
        assert_eq!(doc.lock_count(), 2);
    }

    #[test]
    fn test_concurrent_appends_keep_per_thread_order() {
        let doc = SharedDocument::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let doc = doc.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        doc.add(Shape::point(t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let shapes = doc.snapshot();
        assert_eq!(shapes.len(), 400);
        for t in 0..4 {
            let ys: Vec<i32> = shapes
                .iter()
                .filter_map(|s| match s {
                    Shape::Point(p) if p.x == t => Some(p.y),
                    _ => None,
                })
                .collect();
            assert_eq!(ys, (0..100).collect::<Vec<_>>());
        }
    }
}
