//! Click sparks: short-lived markers that fade out over a fixed number of
//! paint ticks.

/// A spark at a grid cell. Coordinates are not bounds-checked; a spark
/// outside the visible board is simply painted off-surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spark {
    pub col: i32,
    pub row: i32,
    pub remaining: u32,
    pub max_life: u32,
}

impl Spark {
    pub fn new(col: i32, row: i32, life: u32) -> Self {
        Self { col, row, remaining: life, max_life: life }
    }

    /// Linear fade, `remaining / max_life`.
    pub fn opacity(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.remaining as f32 / self.max_life as f32
    }
}

/// Ordered spark collection. Order carries no meaning.
#[derive(Clone, Debug, Default)]
pub struct Sparks {
    items: Vec<Spark>,
}

impl Sparks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, col: i32, row: i32, life: u32) {
        self.items.push(Spark::new(col, row, life));
    }

    /// Advance every spark by one paint tick: decrement all, then drop the
    /// expired ones. Returns how many expired.
    pub fn tick(&mut self) -> usize {
        for spark in self.items.iter_mut() {
            spark.remaining = spark.remaining.saturating_sub(1);
        }
        let before = self.items.len();
        self.items.retain(|s| s.remaining > 0);
        before - self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spark> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_removes_only_expired() {
        let mut sparks = Sparks::new();
        sparks.spawn(0, 0, 1);
        sparks.spawn(1, 1, 3);
        assert_eq!(sparks.tick(), 1);
        assert_eq!(sparks.len(), 1);
        let left = sparks.iter().next().copied();
        assert_eq!(left, Some(Spark { col: 1, row: 1, remaining: 2, max_life: 3 }));
    }

    #[test]
    fn zero_life_spark_goes_on_first_tick() {
        let mut sparks = Sparks::new();
        sparks.spawn(-4, 2, 0);
        assert_eq!(sparks.tick(), 1);
        assert!(sparks.is_empty());
    }

    #[test]
    fn opacity_is_linear() {
        let mut s = Spark::new(0, 0, 50);
        assert_eq!(s.opacity(), 1.0);
        s.remaining = 10;
        assert!((s.opacity() - 0.2).abs() < f32::EPSILON);
        assert_eq!(Spark::new(0, 0, 0).opacity(), 0.0);
    }
}
