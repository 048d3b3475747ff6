use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    /// Not yet labeled. Never present once generation has finished.
    #[default]
    None,
    Downtown,
    Government,
    Commercial,
    Industrial,
    Slums,
    Residential,
}

impl ZoneType {
    /// Every labelable zone, in growth-phase order.
    pub const ALL: [ZoneType; 6] = [
        ZoneType::Downtown,
        ZoneType::Government,
        ZoneType::Commercial,
        ZoneType::Industrial,
        ZoneType::Slums,
        ZoneType::Residential,
    ];

    pub fn is_labeled(self) -> bool {
        self != ZoneType::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZoneType::None => "none",
            ZoneType::Downtown => "downtown",
            ZoneType::Government => "government",
            ZoneType::Commercial => "commercial",
            ZoneType::Industrial => "industrial",
            ZoneType::Slums => "slums",
            ZoneType::Residential => "residential",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub zone: ZoneType,
    pub max_height_floors: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGrid {
    pub cells: Vec<Cell>,
    pub width: usize,
    pub height: usize,
}

impl CityGrid {
    /// A square, fully unlabeled grid.
    pub fn new(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell {
                    x,
                    y,
                    zone: ZoneType::None,
                    max_height_floors: 0,
                });
            }
        }
        Self {
            cells,
            width: size,
            height: size,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    #[inline]
    pub fn zone_at(&self, x: usize, y: usize) -> ZoneType {
        self.get(x, y).zone
    }

    /// Returns up to 4 cardinal neighbors and the count of valid entries.
    /// Use `&result[..count]` to iterate over valid neighbors.
    pub fn neighbors4(&self, x: usize, y: usize) -> ([(usize, usize); 4], usize) {
        let mut result = [(0, 0); 4];
        let mut count = 0;
        if x > 0 {
            result[count] = (x - 1, y);
            count += 1;
        }
        if x + 1 < self.width {
            result[count] = (x + 1, y);
            count += 1;
        }
        if y > 0 {
            result[count] = (x, y - 1);
            count += 1;
        }
        if y + 1 < self.height {
            result[count] = (x, y + 1);
            count += 1;
        }
        (result, count)
    }

    /// Center cell of the grid.
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Euclidean distance (in cells) from `(x, y)` to the center cell.
    pub fn distance_from_center(&self, x: usize, y: usize) -> f32 {
        let (cx, cy) = self.center();
        let dx = x as f32 - cx as f32;
        let dy = y as f32 - cy as f32;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_adjacent_to(&self, x: usize, y: usize, zone: ZoneType) -> bool {
        let (n4, n4c) = self.neighbors4(x, y);
        n4[..n4c]
            .iter()
            .any(|&(nx, ny)| self.zone_at(nx, ny) == zone)
    }

    /// Unlabeled cells orthogonally adjacent to any cell of `zones`, in
    /// row-major order.
    pub fn edge_cells(&self, zones: &[ZoneType]) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.zone_at(x, y).is_labeled() {
                    continue;
                }
                if zones.iter().any(|&z| self.is_adjacent_to(x, y, z)) {
                    edges.push((x, y));
                }
            }
        }
        edges
    }

    pub fn count_zone(&self, zone: ZoneType) -> usize {
        self.cells.iter().filter(|c| c.zone == zone).count()
    }

    pub fn unlabeled_count(&self) -> usize {
        self.count_zone(ZoneType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_SIZE;

    #[test]
    fn test_new_grid_is_unlabeled() {
        let grid = CityGrid::new(GRID_SIZE);
        assert_eq!(grid.cells.len(), GRID_SIZE * GRID_SIZE);
        assert_eq!(grid.unlabeled_count(), GRID_SIZE * GRID_SIZE);
        let cell = grid.get(5, 7);
        assert_eq!((cell.x, cell.y), (5, 7));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = CityGrid::new(GRID_SIZE);
        assert!(!grid.in_bounds(GRID_SIZE, 0));
        assert!(!grid.in_bounds(0, GRID_SIZE));
        assert!(grid.in_bounds(GRID_SIZE - 1, GRID_SIZE - 1));
    }

    #[test]
    fn test_neighbors() {
        let grid = CityGrid::new(GRID_SIZE);
        assert_eq!(grid.neighbors4(0, 0).1, 2);
        assert_eq!(grid.neighbors4(16, 16).1, 4);
        assert_eq!(grid.neighbors4(GRID_SIZE - 1, GRID_SIZE - 1).1, 2);
        assert_eq!(grid.neighbors4(0, 10).1, 3);
    }

    #[test]
    fn test_distance_from_center() {
        let grid = CityGrid::new(GRID_SIZE);
        assert_eq!(grid.center(), (16, 16));
        assert_eq!(grid.distance_from_center(16, 16), 0.0);
        assert!((grid.distance_from_center(19, 20) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_edge_cells_ring_around_zone() {
        let mut grid = CityGrid::new(8);
        grid.get_mut(4, 4).zone = ZoneType::Downtown;
        let edges = grid.edge_cells(&[ZoneType::Downtown]);
        assert_eq!(edges, vec![(4, 3), (3, 4), (5, 4), (4, 5)]);

        // Labeled neighbors are not edge cells.
        grid.get_mut(4, 3).zone = ZoneType::Government;
        let edges = grid.edge_cells(&[ZoneType::Downtown]);
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_zone_type_serde_names() {
        let json = serde_json::to_string(&ZoneType::Slums).expect("serialize");
        assert_eq!(json, "\"slums\"");
        let zone: ZoneType = serde_json::from_str("\"downtown\"").expect("deserialize");
        assert_eq!(zone, ZoneType::Downtown);
        assert_eq!(ZoneType::Industrial.to_string(), "industrial");
    }
}
