// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Grid {
	/// Row-major
	cells: Vec<bool>,
	/// Width & height
	size: [usize; 2],
}

impl Grid {
	fn from_fn(size: [usize; 2], mut f: impl FnMut([usize; 2]) -> bool) -> Self {
		use itertools::iproduct;
		let cells = iproduct!(0..size[1], 0..size[0]).map(|(y, x)| f([x, y])).collect();
		Grid { cells, size }
	}

	fn get(&self, pos: [usize; 2]) -> bool {
		self.cells[pos[1] * self.size[0] + pos[0]]
	}

	fn count(&self) -> usize {
		self.cells.iter().filter(|cell| **cell).count()
	}

	fn positions(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
		let width = self.size[0];
		self.cells.iter()
			.enumerate()
			.filter_map(move |(i, cell)| cell.then_some([i % width, i / width]))
	}

	fn oriented(&self, orientation: Orientation) -> Grid {
		Grid::from_fn(orientation.size(self.size), |pos| self.get(orientation.source(pos, self.size)))
	}

	/// Without the outermost ring of cells.
	fn trimmed(&self) -> Grid {
		let [w, h] = self.size;
		Grid::from_fn([w.saturating_sub(2), h.saturating_sub(2)], |[x, y]| self.get([x + 1, y + 1]))
	}

	/// Top, right, bottom & left; reading left-to-right & top-to-bottom, first cell
	/// being the most significant bit.
	fn borders(&self) -> [u64; 4] {
		fn encode(bits: impl Iterator<Item = bool>) -> u64 {
			bits.fold(0, |acc, bit| acc << 1 | bit as u64)
		}

		let [w, h] = self.size;
		[
			encode((0..w).map(|x| self.get([x, 0]))),
			encode((0..h).map(|y| self.get([w - 1, y]))),
			encode((0..w).map(|x| self.get([x, h - 1]))),
			encode((0..h).map(|y| self.get([0, y]))),
		]
	}
}


/// A vertical mirror (if `flipped`), followed by `rotation` clockwise quarter-turns.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
struct Orientation {
	rotation: u8,
	flipped: bool,
}

impl Orientation {
	const ALL: [Orientation; 8] = [
		Orientation { rotation: 0, flipped: false },
		Orientation { rotation: 0, flipped: true },
		Orientation { rotation: 1, flipped: false },
		Orientation { rotation: 1, flipped: true },
		Orientation { rotation: 2, flipped: false },
		Orientation { rotation: 2, flipped: true },
		Orientation { rotation: 3, flipped: false },
		Orientation { rotation: 3, flipped: true },
	];

	/// Into [`Orientation::ALL`]
	fn index(&self) -> usize {
		(self.rotation % 4) as usize * 2 + self.flipped as usize
	}

	/// Width & height after orienting something of the given `size`
	fn size(&self, size: [usize; 2]) -> [usize; 2] {
		if self.rotation % 2 == 1 { [size[1], size[0]] } else { size }
	}

	/// Maps an oriented position back to the position it was taken from.
	fn source(&self, pos: [usize; 2], size: [usize; 2]) -> [usize; 2] {
		let [mut x, mut y] = pos;
		let [mut w, mut h] = self.size(size);
		for _ in 0..self.rotation % 4 {
			[x, y] = [y, w - 1 - x];
			[w, h] = [h, w];
		}
		if self.flipped { y = h - 1 - y }
		[x, y]
	}
}


#[cfg_attr(test, derive(Debug))]
struct Tile {
	id: u64,
	/// Square, at most 64 cells wide
	grid: Grid,
}

impl Tile {
	/// Encoded top, right, bottom & left borders of the tile in the given orientation.
	fn edges(&self, orientation: Orientation) -> [u64; 4] {
		let n = self.grid.size[0];
		let reversed = |edge: u64| edge.reverse_bits() >> (u64::BITS as usize - n);

		let mut edges = self.grid.borders();
		if orientation.flipped {
			edges = [edges[2], reversed(edges[1]), edges[0], reversed(edges[3])];
		}
		for _ in 0..orientation.rotation % 4 {
			edges = [reversed(edges[3]), edges[0], reversed(edges[1]), edges[2]];
		}
		edges
	}
}

struct Tiles {
	all: Vec<Tile>,
	/// Tiles per side of the assembled square
	width: usize,
}


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
struct Placement {
	/// Index into [`Tiles::all`]
	tile: usize,
	orientation: Orientation,
}

/// Places tiles in row-major order, such that each tile’s left & top edges match its
/// neighbors’ right & bottom edges. Returns `None` if no such assembly exists.
fn backtrack(tiles: &Tiles) -> Option<Vec<Placement>> {

	struct Search<'t> {
		tiles: &'t Tiles,
		edges: Vec<[[u64; 4]; 8]>,
		placed: Vec<bool>,
		placements: Vec<Placement>,
	}

	impl Search<'_> {
		fn placement_edges(&self, placement: &Placement) -> [u64; 4] {
			self.edges[placement.tile][placement.orientation.index()]
		}

		/// Returns whether all remaining tiles got placed; if not, `placements`
		/// & `placed` are left as they were.
		fn place_remaining(&mut self) -> bool {
			let i = self.placements.len();
			if i == self.tiles.all.len() { return true }

			let width = self.tiles.width;
			let left = (i % width > 0).then(|| self.placement_edges(&self.placements[i - 1])[1]);
			let top = (i >= width).then(|| self.placement_edges(&self.placements[i - width])[2]);

			for tile in 0..self.tiles.all.len() {
				if self.placed[tile] { continue }
				for orientation in Orientation::ALL {
					let [t, _, _, l] = self.edges[tile][orientation.index()];
					if left.map_or(false, |left| left != l) { continue }
					if top.map_or(false, |top| top != t) { continue }

					self.placed[tile] = true;
					self.placements.push(Placement { tile, orientation });
					if self.place_remaining() { return true }
					self.placements.pop();
					self.placed[tile] = false;
				}
			}

			false
		}
	}

	let mut search = Search {
		tiles,
		edges: tiles.all.iter()
			.map(|tile| Orientation::ALL.map(|orientation| tile.edges(orientation)))
			.collect(),
		placed: vec![false; tiles.all.len()],
		placements: Vec::with_capacity(tiles.all.len()),
	};
	if !search.place_remaining() { return None }

	#[cfg(LOGGING)]
	{
		use itertools::Itertools as _;
		for row in search.placements.chunks(tiles.width) {
			println!("{}", row.iter().map(|p| tiles.all[p.tile].id).join(" "));
		}
	}

	Some(search.placements)
}

fn corner_product(tiles: &Tiles, assembly: &[Placement]) -> u128 {
	let [n, width] = [assembly.len(), tiles.width];
	[0, width - 1, n - width, n - 1].into_iter()
		.map(|i| u128::from(tiles.all[assembly[i].tile].id))
		.product()
}

/// Stitches together the oriented tiles, each without its border.
fn assemble_image(tiles: &Tiles, assembly: &[Placement]) -> Grid {
	let trimmed = assembly.iter()
		.map(|p| tiles.all[p.tile].grid.oriented(p.orientation).trimmed())
		.collect::<Vec<_>>();
	let [dx, dy] = trimmed.first().map_or([0, 0], |grid| grid.size);
	let width = tiles.width;
	let height = if width == 0 { 0 } else { assembly.len() / width };
	Grid::from_fn([width * dx, height * dy], |[x, y]|
		trimmed[y / dy * width + x / dx].get([x % dx, y % dy]))
}

const SEA_MONSTER: [&str; 3] = [
	"                  # ",
	"#    ##    ##    ###",
	" #  #  #  #  #  #   ",
];

fn sea_monster() -> Grid {
	let size = [SEA_MONSTER[0].len(), SEA_MONSTER.len()];
	Grid::from_fn(size, |[x, y]| SEA_MONSTER[y].as_bytes()[x] == b'#')
}

/// Number of set cells in `image` not covered by any occurrence of `pattern`, in
/// any of its orientations. Unset cells in `pattern` match anything.
fn roughness(image: &Grid, pattern: &Grid) -> usize {
	use {
		std::collections::HashSet,
		itertools::iproduct,
		rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _},
	};

	let covered = Orientation::ALL.par_iter()
		.flat_map_iter(|orientation| {
			let pattern = pattern.oriented(*orientation);
			let offsets = pattern.positions().collect::<Vec<_>>();
			let [xs, ys] = std::array::from_fn(|i| 0..(image.size[i] + 1).saturating_sub(pattern.size[i]));

			let mut covered = vec![];
			for (y, x) in iproduct!(ys, xs) {
				if offsets.iter().all(|[dx, dy]| image.get([x + dx, y + dy])) {
					covered.extend(offsets.iter().map(|[dx, dy]| [x + dx, y + dy]));
				}
			}

			#[cfg(LOGGING)]
			println!("rotation {}{}: {} matches", orientation.rotation,
				if orientation.flipped { " (flipped)" } else { "" },
				covered.len() / offsets.len().max(1));

			covered
		})
		.collect::<HashSet<_>>();

	image.count() - covered.len()
}


fn input_tiles_from_str(s: &str) -> Tiles {
	s.parse().unwrap()
}


fn part1_impl(input_tiles: Tiles) -> u128 {
	let Some(assembly) = backtrack(&input_tiles) else {
		panic!("No assembly of {} tiles", input_tiles.all.len())
	};
	corner_product(&input_tiles, &assembly)
}

pub(crate) fn part1(input: &str) -> u128 {
	part1_impl(input_tiles_from_str(input))
}


fn part2_impl(input_tiles: Tiles) -> usize {
	let Some(assembly) = backtrack(&input_tiles) else {
		panic!("No assembly of {} tiles", input_tiles.all.len())
	};
	roughness(&assemble_image(&input_tiles, &assembly), &sea_monster())
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_tiles_from_str(input))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Grid, Tile, Tiles};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GridError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	fn try_grid_from_lines<'s>(lines: impl Iterator<Item = &'s str>) -> Result<Grid, GridError> {
		let mut cells = vec![];
		let mut width = None;
		let mut height = 0;

		for (l, line) in lines.enumerate() {
			let len = *width.get_or_insert(line.len());
			if line.len() != len {
				return Err(GridError::LineLen { line: l + 1, len, found: line.len() })
			}
			for (c, b) in line.bytes().enumerate() {
				cells.push(match b {
					b'#' => true,
					b'.' => false,
					found => return Err(
						GridError::InvalidByte { line: l + 1, column: c + 1, found }),
				});
			}
			height += 1;
		}

		match width {
			None | Some(0) => Err(GridError::Empty),
			Some(width) => Ok(Grid { cells, size: [width, height] }),
		}
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			try_grid_from_lines(s.lines())
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TileError {
		Header { column: usize },
		Id(ParseIntError),
		Grid(GridError),
		NotSquare { size: [usize; 2] },
		TooWide { width: usize },
	}

	fn try_tile_from_lines<'s>(mut lines: impl Iterator<Item = &'s str>) -> Result<Tile, TileError> {
		use TileError as E;

		let header = lines.next().unwrap_or("");
		let id = header.strip_prefix("Tile ").ok_or(E::Header { column: 1 })?;
		let id = id.strip_suffix(':').ok_or(E::Header { column: header.len() + 1 })?;
		let id = id.parse().map_err(E::Id)?;

		let grid = try_grid_from_lines(lines).map_err(E::Grid)?;
		match grid.size {
			[w, h] if w != h => Err(E::NotSquare { size: grid.size }),
			[w, _] if w > u64::BITS as usize => Err(E::TooWide { width: w }),
			_ => Ok(Tile { id, grid }),
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TilesError {
		Empty,
		Tile { line: usize, source: TileError },
		Size { line: usize, size: usize, found: usize },
		DuplicateId { line: usize, id: u64 },
		Count { found: usize },
	}

	/// Yields each tile along with the line its header is on. Tiles are separated by
	/// one or more empty lines.
	pub(super) fn tiles_from_str(s: &str)
	-> impl Iterator<Item = Result<(usize, Tile), TilesError>> + '_ {
		use {std::iter::{from_fn, once}, either::Either, itertools::Itertools as _};
		if s.trim().is_empty() { return Either::Left(once(Err(TilesError::Empty))) }

		Either::Right(s.lines().enumerate().peekable().batching(|lines| {
			while lines.next_if(|(_, line)| line.is_empty()).is_some() {}
			let &(l, _) = lines.peek()?;
			let tile = try_tile_from_lines(from_fn(||
				lines.next_if(|(_, line)| !line.is_empty()).map(|(_, line)| line)));
			while lines.next_if(|(_, line)| !line.is_empty()).is_some() {}
			Some(tile
				.map(|tile| (l + 1, tile))
				.map_err(|e| TilesError::Tile { line: l + 1, source: e }))
		}))
	}

	impl FromStr for Tiles {
		type Err = TilesError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use TilesError as E;

			let mut ids = std::collections::HashSet::new();
			let mut all = Vec::<Tile>::new();
			for result in tiles_from_str(s) {
				let (line, tile) = result?;
				if let Some(first) = all.first() {
					if tile.grid.size != first.grid.size {
						return Err(E::Size { line, size: first.grid.size[0], found: tile.grid.size[0] })
					}
				}
				if !ids.insert(tile.id) { return Err(E::DuplicateId { line, id: tile.id }) }
				all.push(tile);
			}

			let width = (0..=all.len()).find(|w| w * w >= all.len()).unwrap_or(0);
			if width * width != all.len() { return Err(E::Count { found: all.len() }) }
			Ok(Tiles { all, width })
		}
	}
}


#[cfg(test)]
impl std::fmt::Display for Grid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		for y in 0..self.size[1] {
			if y > 0 { f.write_char('\n')? }
			for x in 0..self.size[0] {
				f.write_char(if self.get([x, y]) { '#' } else { '.' })?
			}
		}
		Ok(())
	}
}


#[cfg(test)]
const INPUT: &str = indoc::indoc! { "
	Tile 2311:
	..##.#..#.
	##..#.....
	#...##..#.
	####.#...#
	##.##.###.
	##...#.###
	.#.#.#..##
	..#....#..
	###...#.#.
	..###..###

	Tile 1951:
	#.##...##.
	#.####...#
	.....#..##
	#...######
	.##.#....#
	.###.#####
	###.##.##.
	.###....#.
	..#.#..#.#
	#...##.#..

	Tile 1171:
	####...##.
	#..##.#..#
	##.#..#.#.
	.###.####.
	..###.####
	.##....##.
	.#...####.
	#.##.####.
	####..#...
	.....##...

	Tile 1427:
	###.##.#..
	.#..#.##..
	.#.##.#..#
	#.#.#.##.#
	....#...##
	...##..##.
	...#.#####
	.#.####.#.
	..#..###.#
	..##.#..#.

	Tile 1489:
	##.#.#....
	..##...#..
	.##..##...
	..#...#...
	#####...#.
	#..#.#.#.#
	...#.#.#..
	##.#...##.
	..##.##.##
	###.##.#..

	Tile 2473:
	#....####.
	#..#.##...
	#.##..#...
	######.#.#
	.#...#.#.#
	.#########
	.###.#..#.
	########.#
	##...##.#.
	..###.#.#.

	Tile 2971:
	..#.#....#
	#...###...
	#.#.###...
	##.##..#..
	.#####..##
	.#..####.#
	#..#.#..#.
	..####.###
	..#.#.###.
	...#.#.#.#

	Tile 2729:
	...#.#.#.#
	####.#....
	..#.#.....
	....#..#.#
	.##..##.#.
	.#.####...
	####.#.#..
	##.####...
	##..#.##..
	#.##...##.

	Tile 3079:
	#.#.#####.
	.#..######
	..#.......
	######....
	####.#..#.
	.#...#.##.
	#.#####.##
	..#.###...
	..#.......
	..#.###...
" };

#[test]
fn tests() {
	assert_eq!(part1_impl(input_tiles_from_str(INPUT)), 20899048083289);
	assert_eq!(part2_impl(input_tiles_from_str(INPUT)), 273);
}


#[cfg(test)]
mod properties {
	use {itertools::Itertools as _, test_case::test_case};
	use super::*;

	fn literal_tile() -> Tile {
		Tile { id: 123, grid: "##.#\n....\n#...\n...#".parse().unwrap() }
	}

	#[test_case(0, false => [13, 9, 1, 10] ; "identity")]
	#[test_case(0, true => [1, 9, 13, 5] ; "flipped")]
	#[test_case(1, false => [5, 13, 9, 1] ; "quarter turn")]
	#[test_case(2, false => [8, 5, 11, 9] ; "half turn")]
	#[test_case(4, false => [13, 9, 1, 10] ; "full turn")]
	#[test_case(4, true => [1, 9, 13, 5] ; "full turn flipped")]
	fn literal_tile_edges(rotation: u8, flipped: bool) -> [u64; 4] {
		literal_tile().edges(Orientation { rotation, flipped })
	}

	#[test]
	fn edges_are_borders_of_oriented_grid() {
		let tiles = input_tiles_from_str(INPUT);
		for tile in tiles.all.iter().chain([&literal_tile()]) {
			for orientation in Orientation::ALL {
				assert_eq!(tile.edges(orientation), tile.grid.oriented(orientation).borders(),
					"tile {} in {orientation:?}", tile.id);
			}
		}
	}

	#[test]
	fn rotation_permutes_borders() {
		let tiles = input_tiles_from_str(INPUT);
		for tile in &tiles.all {
			let n = tile.grid.size[0];
			let unreversed = |edge: u64| edge.min(edge.reverse_bits() >> (64 - n));
			for flipped in [false, true] {
				let edges = |rotation: u8| tile.edges(Orientation { rotation, flipped });
				let borders = edges(0).map(unreversed).into_iter().sorted().collect_vec();
				for rotation in 1..4 {
					assert_eq!(edges(rotation).map(unreversed).into_iter().sorted().collect_vec(), borders);
				}
				let tops = (0..4).map(|rotation| unreversed(edges(rotation)[0])).sorted().collect_vec();
				assert_eq!(tops, borders);
				assert_eq!(edges(4), edges(0));
			}
		}
	}

	#[test]
	fn oriented_grid() {
		let grid: Grid = "#..\n##.".parse().unwrap();
		let oriented = |rotation, flipped| grid.oriented(Orientation { rotation, flipped }).to_string();
		assert_eq!(oriented(0, false), "#..\n##.");
		assert_eq!(oriented(0, true), "##.\n#..");
		assert_eq!(oriented(1, false), "##\n#.\n..");
		assert_eq!(oriented(2, false), ".##\n..#");
		assert_eq!(oriented(3, false), "..\n.#\n##");
		assert_eq!(oriented(1, true), "##\n.#\n..");
		assert_eq!(grid.trimmed().size, [1, 0]);
	}

	#[test]
	fn assembly_matches_edges() {
		let tiles = input_tiles_from_str(INPUT);
		let assembly = backtrack(&tiles).unwrap();

		let placed_ids = assembly.iter().map(|p| tiles.all[p.tile].id).sorted().collect_vec();
		let ids = tiles.all.iter().map(|t| t.id).sorted().collect_vec();
		assert_eq!(placed_ids, ids);

		let edges = |p: &Placement| tiles.all[p.tile].edges(p.orientation);
		for (i, placement) in assembly.iter().enumerate() {
			if i % tiles.width > 0 {
				assert_eq!(edges(&assembly[i - 1])[1], edges(placement)[3]);
			}
			if i >= tiles.width {
				assert_eq!(edges(&assembly[i - tiles.width])[2], edges(placement)[0]);
			}
		}

		assert_eq!(backtrack(&tiles), Some(assembly));
	}

	#[test]
	fn unassemblable() {
		const INPUT: &str = indoc::indoc! { "
			Tile 1:
			###
			#.#
			###

			Tile 2:
			...
			...
			...

			Tile 3:
			###
			#.#
			###

			Tile 4:
			...
			...
			...
		" };
		assert_eq!(backtrack(&input_tiles_from_str(INPUT)), None);
		assert_eq!(backtrack(&Tiles { all: vec![], width: 0 }), Some(vec![]));
	}

	#[test]
	fn single_tile() {
		assert_eq!(part1_impl(input_tiles_from_str("Tile 9:\n#\n")), 6561);
		assert_eq!(part2_impl(input_tiles_from_str("Tile 9:\n#\n")), 0);
	}

	#[test]
	fn large_corner_ids() {
		const INPUT: &str = indoc::indoc! { "
			Tile 100001:
			#

			Tile 100002:
			#

			Tile 100003:
			#

			Tile 100004:
			#
		" };
		assert_eq!(part1_impl(input_tiles_from_str(INPUT)), 100010000350005000024);
	}

	#[test]
	fn crlf_and_extra_empty_lines() {
		let crlf = INPUT.replace('\n', "\r\n");
		assert_eq!(part1_impl(input_tiles_from_str(&crlf)), 20899048083289);
		assert_eq!(part2_impl(input_tiles_from_str(&crlf)), 273);

		let spaced = INPUT.replace("\n\n", "\n\n\n");
		assert_eq!(part1_impl(input_tiles_from_str(&spaced)), 20899048083289);

		use parsing::{TileError, TilesError};
		assert!(matches!("Tile 7\r\n#\r\n".parse::<Tiles>(),
			Err(TilesError::Tile { line: 1, source: TileError::Header { column: 7 } })));
	}

	#[test]
	fn image() {
		let tiles = input_tiles_from_str(INPUT);
		let image = assemble_image(&tiles, &backtrack(&tiles).unwrap());
		assert_eq!(image.size, [24, 24]);
		assert_eq!(image.count(), 303);
	}

	#[test]
	fn roughness_of_monsters() {
		let monster = sea_monster();
		assert_eq!(monster.count(), 15);
		for orientation in Orientation::ALL {
			assert_eq!(roughness(&monster.oriented(orientation), &monster), 0);
		}

		let rough = Grid::from_fn(monster.size, |pos| monster.get(pos) || pos == [0, 0]);
		assert_eq!(roughness(&rough, &monster), 1);

		let checkerboard = Grid::from_fn([20, 20], |[x, y]| (x + y) % 2 == 0);
		assert_eq!(roughness(&checkerboard, &monster), 200);

		let small = Grid::from_fn([10, 10], |_| true);
		assert_eq!(roughness(&small, &monster), 100);
	}

	#[test]
	fn parsing_errors() {
		use parsing::{GridError, TileError, TilesError};
		macro_rules! assert_err { ( $s:expr, $pat:pat ) => {
			assert!(matches!($s.parse::<Tiles>(), Err($pat)))
		} }

		assert_err!("", TilesError::Empty);
		assert_err!("\n\n", TilesError::Empty);
		assert_err!("Tlie 7:\n#\n", TilesError::Tile { line: 1, source: TileError::Header { column: 1 } });
		assert_err!("Tile 7\n#\n", TilesError::Tile { line: 1, source: TileError::Header { column: 7 } });
		assert_err!("Tile x:\n#\n", TilesError::Tile { line: 1, source: TileError::Id(_) });
		assert_err!("Tile 7:\n", TilesError::Tile { source: TileError::Grid(GridError::Empty), .. });
		assert_err!("Tile 7:\n#.#\n##\n", TilesError::Tile {
			line: 1, source: TileError::Grid(GridError::LineLen { line: 2, len: 3, found: 2 }) });
		assert_err!("Tile 7:\n#x\n..\n", TilesError::Tile {
			line: 1, source: TileError::Grid(GridError::InvalidByte { line: 1, column: 2, found: b'x' }) });
		assert_err!("Tile 7:\n#.\n##\n#.\n", TilesError::Tile {
			source: TileError::NotSquare { size: [2, 3] }, .. });
		assert_err!("Tile 1:\n#\n\nTile 2:\n##\n##\n", TilesError::Size { line: 4, size: 1, found: 2 });
		assert_err!("Tile 1:\n#.\n##\n\nTile 1:\n..\n.#\n", TilesError::DuplicateId { line: 5, id: 1 });
		assert_err!("Tile 1:\n#.\n##\n\nTile 2:\n..\n.#\n", TilesError::Count { found: 2 });
	}
}
