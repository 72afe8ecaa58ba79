//! # Enum Demos

use std::fmt;
use std::str::FromStr;

use crate::core::dispatcher::Demo;
use crate::core::render::{Renderer, Section};

// ── Basic Enums ─────────────────────────────────────────────────────────────

pub struct BasicEnums;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl Demo for BasicEnums {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "BASIC ENUMS\n\
             An enum lists every value a type can take. The compiler knows the full \
             list, so a `match` must handle each variant. Add a variant later and \
             every incomplete match becomes a compile error.",
        );
        out.section(
            Section::Code,
            r#"#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction { North, East, South, West }

impl Direction {
    const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

for d in Direction::ALL {
    println!("{:?} is opposite {:?}", d, d.opposite());
}
println!("North == North? {}", Direction::North == Direction::North);"#,
        );

        let mut lines: Vec<String> = Direction::ALL
            .iter()
            .map(|d| format!("{:?} is opposite {:?}", d, d.opposite()))
            .collect();
        lines.push(format!(
            "North == North? {}",
            Direction::North == Direction::North
        ));
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Enums name a closed set of values\n\
             - match is exhaustive: a missing variant does not compile\n\
             - derive gives Debug printing, copying and comparison for free",
        );
    }
}

// ── Iota Enums ──────────────────────────────────────────────────────────────

pub struct IotaEnums;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    fn from_index(n: u8) -> Option<Self> {
        use Weekday::*;
        [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday]
            .get(usize::from(n))
            .copied()
    }
}

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;

const READ: u8 = 1 << 0;
const WRITE: u8 = 1 << 1;
const EXECUTE: u8 = 1 << 2;

fn permissions(bits: u8) -> String {
    [(READ, 'r'), (WRITE, 'w'), (EXECUTE, 'x')]
        .iter()
        .map(|&(flag, c)| if bits & flag != 0 { c } else { '-' })
        .collect()
}

impl Demo for IotaEnums {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "NUMBERED VARIANTS\n\
             Fieldless enums can carry explicit integer discriminants. Give the first \
             variant a value and the rest count up from it. `#[repr(u8)]` fixes the \
             storage size, `as` converts a variant to its number, and going back the \
             other way is a checked lookup. Shifted constants (`1 << n`) build size \
             units and bit flags.",
        );
        out.section(
            Section::Code,
            r#"#[repr(u8)]
enum Weekday { Sunday = 0, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday }

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;

const READ: u8 = 1 << 0;
const WRITE: u8 = 1 << 1;
const EXECUTE: u8 = 1 << 2;

println!("Wednesday = {}", Weekday::Wednesday as u8);
println!("day 5 = {:?}", Weekday::from_index(5));
println!("day 9 = {:?}", Weekday::from_index(9));
println!("KB={} MB={} GB={}", KB, MB, GB);
println!("READ|WRITE = {}", permissions(READ | WRITE));
println!("all = {}", permissions(READ | WRITE | EXECUTE));"#,
        );

        let lines = [
            format!("Wednesday = {}", Weekday::Wednesday as u8),
            format!("day 5 = {:?}", Weekday::from_index(5)),
            format!("day 9 = {:?}", Weekday::from_index(9)),
            format!("KB={KB} MB={MB} GB={GB}"),
            format!("READ|WRITE = {}", permissions(READ | WRITE)),
            format!("all = {}", permissions(READ | WRITE | EXECUTE)),
        ];
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Discriminants count up from the last explicit value\n\
             - Variant to number is a cast, number to variant must be checked\n\
             - Shifts make powers of two readable: sizes and bit flags",
        );
    }
}

// ── String Enums ────────────────────────────────────────────────────────────

pub struct StringEnums;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pending,
    Active,
    Suspended,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pending => "pending",
            Status::Active => "active",
            Status::Suspended => "suspended",
        };
        f.write_str(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct UnknownStatus(String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "active" => Ok(Status::Active),
            "suspended" => Ok(Status::Suspended),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl Demo for StringEnums {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "ENUMS AS STRINGS\n\
             `Display` decides how a variant prints; `FromStr` decides how text \
             becomes a variant. Together they give an enum a stable string form for \
             config files, logs and user input, while the program itself keeps \
             working with the type-checked enum.",
        );
        out.section(
            Section::Code,
            r#"enum Status { Pending, Active, Suspended }

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pending => "pending",
            Status::Active => "active",
            Status::Suspended => "suspended",
        })
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;
    fn from_str(s: &str) -> Result<Self, Self::Err> { /* case-insensitive match */ }
}

println!("{}", Status::Active);
for input in ["Pending", "SUSPENDED", "deleted"] {
    println!("{:?} -> {:?}", input, input.parse::<Status>());
}"#,
        );

        let mut lines = vec![Status::Active.to_string()];
        for input in ["Pending", "SUSPENDED", "deleted"] {
            lines.push(format!("{:?} -> {:?}", input, input.parse::<Status>()));
        }
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Display gives each variant one canonical spelling\n\
             - FromStr makes parsing fallible and explicit\n\
             - Unknown strings become errors, never a silent default",
        );
    }
}

// ── Behavior Enums ──────────────────────────────────────────────────────────

pub struct BehaviorEnums;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrafficLight {
    Red,
    Green,
    Yellow,
}

impl TrafficLight {
    fn next(self) -> Self {
        match self {
            TrafficLight::Red => TrafficLight::Green,
            TrafficLight::Green => TrafficLight::Yellow,
            TrafficLight::Yellow => TrafficLight::Red,
        }
    }

    fn seconds(self) -> u32 {
        match self {
            TrafficLight::Red => 30,
            TrafficLight::Green => 25,
            TrafficLight::Yellow => 5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(i64),
    Mul(i64),
    Neg,
}

impl Op {
    fn apply(self, x: i64) -> i64 {
        match self {
            Op::Add(n) => x + n,
            Op::Mul(n) => x * n,
            Op::Neg => -x,
        }
    }
}

fn light_cycle(start: TrafficLight, steps: usize) -> Vec<String> {
    std::iter::successors(Some(start), |l| Some(l.next()))
        .take(steps)
        .map(|l| format!("{:?} for {}s", l, l.seconds()))
        .collect()
}

impl Demo for BehaviorEnums {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "ENUMS WITH BEHAVIOR\n\
             Enums take `impl` blocks like any other type, so the rules for each \
             variant live right next to it. Variants can also carry data, which \
             turns an enum into a compact instruction set or a state machine.",
        );
        out.section(
            Section::Code,
            r#"enum TrafficLight { Red, Green, Yellow }

impl TrafficLight {
    fn next(self) -> Self { /* Red -> Green -> Yellow -> Red */ }
    fn seconds(self) -> u32 { /* 30, 25, 5 */ }
}

enum Op { Add(i64), Mul(i64), Neg }

impl Op {
    fn apply(self, x: i64) -> i64 {
        match self {
            Op::Add(n) => x + n,
            Op::Mul(n) => x * n,
            Op::Neg => -x,
        }
    }
}

let mut light = TrafficLight::Red;
for _ in 0..4 {
    println!("{:?} for {}s", light, light.seconds());
    light = light.next();
}

let program = [Op::Add(3), Op::Mul(4), Op::Neg];
let result = program.iter().fold(2, |acc, op| op.apply(acc));
println!("{:?} on 2 = {}", program, result);"#,
        );

        let mut lines = light_cycle(TrafficLight::Red, 4);
        let program = [Op::Add(3), Op::Mul(4), Op::Neg];
        let result = program.iter().fold(2, |acc, op| op.apply(acc));
        lines.push(format!("{:?} on 2 = {}", program, result));
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Methods on enums keep per-variant rules in one match\n\
             - Data-carrying variants model operations and states precisely\n\
             - State transitions become plain functions: next(self) -> Self",
        );
    }
}
