// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![20];

fn main() -> std::io::Result<()> {
	let input = std::io::read_to_string(std::io::stdin())?;
	println!("{}", day20::part1(&input));
	println!("{}", day20::part2(&input));
	Ok(())
}
