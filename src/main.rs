use anyhow::{anyhow, Context, Result};
use bumpalo::Bump;
use linkedlist::LinkedList;
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod linkedlist;

/*
 * One line of a list script. Mutators carry the value to insert or
 * remove, lookups carry their index or count, queries carry nothing.
 */
#[derive(Debug, PartialEq, Eq)]
enum Command {
    AddFirst(i64),
    AddLast(i64),
    InsertAscending(i64),
    Delete(i64),
    Search(i64),
    GetAtIndex(usize),
    FindNthFromEnd(usize),
    FindMax,
    FindMin,
    Length,
    GetFirst,
    GetLast,
    FindMiddleValue,
    Reverse,
    Visit,
    HasCycle,
    CreateCycle,
}

/*
 * Parse a script from input.
 * Input should be a list of lines, each formatted as follows :
 * <command> [integer argument]
 * Blank lines are skipped.
 */
fn parse_script(input: &str) -> Result<Vec<Command>> {
    let re = Regex::new(r"^\s*([a-z_]+)(?:\s+(-?\d+))?\s*$")?;
    let mut script = Vec::new();

    for l in input.lines() {
        if l.trim().is_empty() {
            continue;
        }
        let captures = re
            .captures(l)
            .ok_or(anyhow!("Failed to parse line {}", l))?;
        let name = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let arg = captures.get(2).map(|m| m.as_str());

        let value = || -> Result<i64> {
            arg.ok_or(anyhow!("Command {} expects a value", name))?
                .parse()
                .context("Failed to parse value")
        };
        let count = || -> Result<usize> {
            arg.ok_or(anyhow!("Command {} expects a count", name))?
                .parse()
                .context("Failed to parse count")
        };
        let none = || -> Result<()> {
            match arg {
                Some(extra) => Err(anyhow!("Command {} takes no argument, got {}", name, extra)),
                None => Ok(()),
            }
        };

        let command = match name {
            "add_first" => Command::AddFirst(value()?),
            "add_last" => Command::AddLast(value()?),
            "insert_ascending" => Command::InsertAscending(value()?),
            "delete" => Command::Delete(value()?),
            "search" => Command::Search(value()?),
            "get_at_index" => Command::GetAtIndex(count()?),
            "find_nth_from_end" => Command::FindNthFromEnd(count()?),
            "find_max" => {
                none()?;
                Command::FindMax
            }
            "find_min" => {
                none()?;
                Command::FindMin
            }
            "length" => {
                none()?;
                Command::Length
            }
            "get_first" => {
                none()?;
                Command::GetFirst
            }
            "get_last" => {
                none()?;
                Command::GetLast
            }
            "find_middle_value" => {
                none()?;
                Command::FindMiddleValue
            }
            "reverse" => {
                none()?;
                Command::Reverse
            }
            "visit" => {
                none()?;
                Command::Visit
            }
            "has_cycle" => {
                none()?;
                Command::HasCycle
            }
            "create_cycle" => {
                none()?;
                Command::CreateCycle
            }
            _ => return Err(anyhow!("Unknown command {}", name)),
        };
        script.push(command);
    }

    Ok(script)
}

fn display(result: Option<&i64>) -> String {
    match result {
        Some(v) => v.to_string(),
        None => String::from("none"),
    }
}

/*
 * Apply the script in order to a single list, printing query results.
 */
fn run(script: &[Command]) {
    let arena = Bump::new();
    let mut list = LinkedList::new_in(&arena);

    for command in script {
        match command {
            Command::AddFirst(v) => list.add_first(*v),
            Command::AddLast(v) => list.add_last(*v),
            Command::InsertAscending(v) => list.insert_ascending(*v),
            Command::Delete(v) => list.delete(v),
            Command::Reverse => list.reverse(),
            Command::CreateCycle => list.create_cycle(),
            Command::Search(v) => println!("search {} = {}", v, list.search(v)),
            Command::GetAtIndex(i) => {
                println!("get_at_index {} = {}", i, display(list.get_at_index(*i)))
            }
            Command::FindNthFromEnd(n) => println!(
                "find_nth_from_end {} = {}",
                n,
                display(list.find_nth_from_end(*n))
            ),
            Command::FindMax => println!("find_max = {}", display(list.find_max())),
            Command::FindMin => println!("find_min = {}", display(list.find_min())),
            Command::Length => println!("length = {}", list.length()),
            Command::GetFirst => println!("get_first = {}", display(list.get_first())),
            Command::GetLast => println!("get_last = {}", display(list.get_last())),
            Command::FindMiddleValue => {
                println!("find_middle_value = {}", list.find_middle_value())
            }
            Command::Visit => println!("{}", list.visit()),
            Command::HasCycle => println!("has_cycle = {}", list.has_cycle()),
        }
    }
}

fn main() -> Result<()> {
    if env::args().len() != 2 {
        println!(
            "Usage : {} [script file]",
            env::args().next().unwrap_or_default()
        );
        process::exit(1);
    }
    let path = env::args().nth(1).unwrap_or_default();

    let mut f = File::open(path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read file")?;

    let script = parse_script(&input).context("Failed to parse script")?;
    run(&script);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_script() {
        let input = "add_first 3

add_last -1
visit
find_nth_from_end 0";
        let script = parse_script(input).unwrap();
        assert_eq!(
            script,
            vec![
                Command::AddFirst(3),
                Command::AddLast(-1),
                Command::Visit,
                Command::FindNthFromEnd(0),
            ]
        );
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(parse_script("pop_front 1").is_err());
    }

    #[test]
    fn parse_rejects_missing_argument() {
        assert!(parse_script("add_first").is_err());
    }

    #[test]
    fn parse_rejects_extra_argument() {
        assert!(parse_script("reverse 2").is_err());
    }
}
