use std::io::{self, Write};

use structopt::StructOpt;

use subset_cast::{
    check_mutable_subset, check_subset, try_convert_to, view_mut, SubsetError, SubsetLayout,
};

#[repr(C)]
#[derive(SubsetLayout)]
pub struct Type1<'a> {
    t1: i8,
    t2: &'a i32,
    t3: String,
}

#[repr(C)]
#[derive(SubsetLayout, Copy, Clone)]
pub struct Type2<'a> {
    tt1: i8,
    tt2: &'a i32,
}

/// `Type2` with the types of its fields swapped.
#[allow(dead_code)]
#[repr(C)]
#[derive(SubsetLayout, Copy, Clone)]
pub struct Swapped<'a> {
    tt1: &'a i32,
    tt2: i8,
}

#[allow(dead_code)]
#[repr(C)]
#[derive(SubsetLayout, Debug)]
pub struct Monster {
    id: u64,
    health: f64,
    is_boss: bool,
    name: String,
}

#[allow(dead_code)]
#[repr(C)]
#[derive(SubsetLayout, Debug)]
pub struct Stats {
    monster_id: u64,
    hp: f64,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "convert")]
    /// Reads a `Type2` out of a `Type1`,sharing the referenced integer.
    Convert {
        #[structopt(long = "t1", default_value = "1")]
        t1: i8,
        #[structopt(long = "t2", default_value = "2")]
        t2: i32,
        #[structopt(long = "t3", default_value = "test")]
        t3: String,
    },

    #[structopt(name = "damage")]
    /// Damages a monster through a mutable `Stats` view of it.
    Damage {
        #[structopt(default_value = "25")]
        amount: f64,
    },

    #[structopt(name = "check")]
    /// Prints the result of checking some pairs of types.
    Check,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match Command::from_args() {
        Command::Convert { t1, t2, t3 } => {
            let t1 = Type1 { t1, t2: &t2, t3 };

            match unsafe { try_convert_to::<&Type1<'_>, Type2<'_>>(&t1) } {
                Ok(t2) => {
                    writeln!(out, "tt1: {}", t2.tt1)?;
                    writeln!(out, "tt2: {}", t2.tt2)?;
                    writeln!(out, "t3 is still: {:?}", t1.t3)?;
                    writeln!(
                        out,
                        "tt2 points to t2: {}",
                        std::ptr::eq(t2.tt2, t1.t2)
                    )?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        Command::Damage { amount } => {
            let mut monster = Monster {
                id: 1,
                health: 100.0,
                is_boss: true,
                name: "dragon".into(),
            };
            writeln!(out, "before: {:?}", monster)?;

            view_mut::<Monster, Stats>(&mut monster).hp -= amount;

            writeln!(out, "after:  {:?}", monster)?;
        }
        Command::Check => {
            let results: [(&str, Result<(), SubsetError>); 5] = [
                ("&Type1 -> Type2", check_subset::<&Type1<'_>, Type2<'_>>()),
                ("&Type2 -> Type1", check_subset::<&Type2<'_>, Type1<'_>>()),
                ("&Type1 -> Swapped", check_subset::<&Type1<'_>, Swapped<'_>>()),
                ("&Type2 -> Type2", check_subset::<&Type2<'_>, Type2<'_>>()),
                (
                    "&mut Monster -> Stats",
                    check_mutable_subset::<&mut Monster, Stats>(),
                ),
            ];

            for (pair, result) in results {
                match result {
                    Ok(()) => writeln!(out, "{}: ok", pair)?,
                    Err(e) => writeln!(out, "{}: {}", pair, e.kind_name())?,
                }
            }
        }
    }

    Ok(())
}
