use anyhow::{Context, Result};
use linked_list::LinkedList;
use log::info;

const DEFAULT_VALUES: [i64; 4] = [3, 1, 9, 2];

fn parse_values(args: impl Iterator<Item = String>) -> Result<Vec<i64>> {
    let values = args
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("`{}` is not an integer", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        Ok(DEFAULT_VALUES.to_vec())
    } else {
        Ok(values)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let values = parse_values(std::env::args().skip(1))?;
    info!("building list from {} values", values.len());

    let mut list = LinkedList::from(values);
    println!("{}", list);
    list.insert(2, 99)?;
    println!("{}", list);
    list.sort()?;
    println!("{}", list);
    list.clear();
    println!("{}", list);
    Ok(())
}
