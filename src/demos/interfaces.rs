//! # Interface Demos
//!
//! Traits are Rust's interfaces. Each demo here is a unit struct
//! implementing `Demo`; the code it shows is the code it runs.

use std::any::Any;
use std::fmt::Debug;

use crate::core::dispatcher::Demo;
use crate::core::render::{Renderer, Section};

// ── Basic Interfaces ────────────────────────────────────────────────────────

pub struct BasicInterfaces;

trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

struct Circle {
    radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

fn shape_info(s: &dyn Shape) -> Vec<String> {
    vec![
        format!("Area: {:.2}", s.area()),
        format!("Perimeter: {:.2}", s.perimeter()),
    ]
}

impl Demo for BasicInterfaces {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "BASIC INTERFACES (TRAITS)\n\
             A trait is a named set of method signatures. Any type that implements \
             every method can be used wherever the trait is expected. It describes \
             behavior, not data layout.\n\n\
             - Traits define behavior through method signatures\n\
             - Types opt in with `impl Trait for Type`\n\
             - A type can implement many traits\n\
             - `&dyn Trait` gives runtime polymorphism",
        );
        out.section(
            Section::Code,
            r#"trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

struct Rectangle { width: f64, height: f64 }
struct Circle { radius: f64 }

impl Shape for Rectangle {
    fn area(&self) -> f64 { self.width * self.height }
    fn perimeter(&self) -> f64 { 2.0 * (self.width + self.height) }
}

impl Shape for Circle {
    fn area(&self) -> f64 { PI * self.radius * self.radius }
    fn perimeter(&self) -> f64 { 2.0 * PI * self.radius }
}

fn print_shape_info(s: &dyn Shape) {
    println!("Area: {:.2}", s.area());
    println!("Perimeter: {:.2}", s.perimeter());
}

print_shape_info(&Rectangle { width: 5.0, height: 4.0 });
print_shape_info(&Circle { radius: 3.0 });"#,
        );

        let mut lines = vec!["Rectangle:".to_string()];
        lines.extend(shape_info(&Rectangle {
            width: 5.0,
            height: 4.0,
        }));
        lines.push(String::new());
        lines.push("Circle:".to_string());
        lines.extend(shape_info(&Circle { radius: 3.0 }));
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Rectangle and Circle both implement Shape by providing area() and perimeter()\n\
             - print_shape_info accepts any type that implements Shape\n\
             - Different types respond to the same method calls: polymorphism",
        );
    }
}

// ── Interface Implementation ────────────────────────────────────────────────

pub struct InterfaceImplementation;

trait Speaker {
    fn name(&self) -> String;
    fn sound(&self) -> &'static str;

    /// Default method, built from the required ones.
    fn speak(&self) -> String {
        format!("{} says {}", self.name(), self.sound())
    }
}

struct Dog;
struct Robot {
    serial: u32,
}

impl Speaker for Dog {
    fn name(&self) -> String {
        "Dog".into()
    }

    fn sound(&self) -> &'static str {
        "Woof"
    }
}

impl Speaker for Robot {
    fn name(&self) -> String {
        format!("Robot #{}", self.serial)
    }

    fn sound(&self) -> &'static str {
        "Beep"
    }

    fn speak(&self) -> String {
        format!("{} transmits {}-{}", self.name(), self.sound(), self.sound())
    }
}

impl Demo for InterfaceImplementation {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "IMPLEMENTING INTERFACES\n\
             A trait can mix required methods with default methods. Implementors \
             must provide the required ones and may override the defaults. Values \
             of different types can share one collection through `Box<dyn Trait>`.",
        );
        out.section(
            Section::Code,
            r#"trait Speaker {
    fn name(&self) -> String;
    fn sound(&self) -> &'static str;
    fn speak(&self) -> String {
        format!("{} says {}", self.name(), self.sound())
    }
}

impl Speaker for Dog { /* name + sound, default speak */ }
impl Speaker for Robot { /* name + sound, overrides speak */ }

let speakers: Vec<Box<dyn Speaker>> = vec![Box::new(Dog), Box::new(Robot { serial: 7 })];
for s in &speakers {
    println!("{}", s.speak());
}"#,
        );

        let speakers: Vec<Box<dyn Speaker>> = vec![Box::new(Dog), Box::new(Robot { serial: 7 })];
        let lines: Vec<String> = speakers.iter().map(|s| s.speak()).collect();
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Default methods reduce boilerplate for implementors\n\
             - Overriding a default changes behavior for that type only\n\
             - Box<dyn Trait> stores different concrete types side by side",
        );
    }
}

// ── Empty Interface ─────────────────────────────────────────────────────────

pub struct EmptyInterface;

fn describe<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?} has type {}", value, std::any::type_name::<T>())
}

impl Demo for EmptyInterface {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "HOLDING VALUES OF ANY TYPE\n\
             Rust has no single interface that every type satisfies implicitly, but \
             two tools cover the same ground. `dyn Any` can hold any 'static value \
             and remembers its concrete type. Generics with a trait bound such as \
             `T: Debug` accept any type that offers the needed behavior, checked at \
             compile time.",
        );
        out.section(
            Section::Code,
            r#"fn describe<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?} has type {}", value, std::any::type_name::<T>())
}

println!("{}", describe(&42));
println!("{}", describe("hello"));
println!("{}", describe(&2.5));
println!("{}", describe(&vec![1, 2, 3]));

let bag: Vec<Box<dyn Any>> = vec![Box::new(42), Box::new("hello"), Box::new(true)];
println!("bag holds {} values", bag.len());"#,
        );

        let bag: Vec<Box<dyn Any>> = vec![Box::new(42_i32), Box::new("hello"), Box::new(true)];
        let lines = [
            describe(&42),
            describe("hello"),
            describe(&2.5),
            describe(&vec![1, 2, 3]),
            format!("bag holds {} values", bag.len()),
        ];
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Prefer generics with trait bounds: the compiler checks every use\n\
             - Reach for dyn Any only when the set of types is truly open\n\
             - A value inside dyn Any must be downcast before it can be used",
        );
    }
}

// ── Type Assertion ──────────────────────────────────────────────────────────

pub struct TypeAssertion;

fn classify(value: &dyn Any) -> String {
    if let Some(n) = value.downcast_ref::<i32>() {
        format!("i32, doubled is {}", n * 2)
    } else if let Some(s) = value.downcast_ref::<&str>() {
        format!("&str of length {}", s.len())
    } else if let Some(b) = value.downcast_ref::<bool>() {
        format!("bool, negated is {}", !b)
    } else {
        "unknown type".to_string()
    }
}

impl Demo for TypeAssertion {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "RECOVERING THE CONCRETE TYPE\n\
             `downcast_ref::<T>()` asks a `dyn Any` whether it holds a T. It returns \
             `Some(&T)` on a match and `None` otherwise, so a wrong guess is a value \
             to handle, never a crash. Chaining checks gives a type switch.",
        );
        out.section(
            Section::Code,
            r#"fn classify(value: &dyn Any) -> String {
    if let Some(n) = value.downcast_ref::<i32>() {
        format!("i32, doubled is {}", n * 2)
    } else if let Some(s) = value.downcast_ref::<&str>() {
        format!("&str of length {}", s.len())
    } else if let Some(b) = value.downcast_ref::<bool>() {
        format!("bool, negated is {}", !b)
    } else {
        "unknown type".to_string()
    }
}

let values: Vec<Box<dyn Any>> =
    vec![Box::new(21), Box::new("traits"), Box::new(false), Box::new(2.5)];
for v in &values {
    println!("{}", classify(v.as_ref()));
}

let guess: Option<&String> = values[0].downcast_ref::<String>();
println!("values[0] is a String? {}", guess.is_some());"#,
        );

        let values: Vec<Box<dyn Any>> = vec![
            Box::new(21_i32),
            Box::new("traits"),
            Box::new(false),
            Box::new(2.5_f64),
        ];
        let mut lines: Vec<String> = values.iter().map(|v| classify(v.as_ref())).collect();
        let guess = values[0].downcast_ref::<String>();
        lines.push(format!("values[0] is a String? {}", guess.is_some()));
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- downcast_ref returns Option, the check and the conversion are one step\n\
             - A failed downcast is an ordinary None\n\
             - Exact types only: a &str is not a String",
        );
    }
}

// ── Interface Composition ───────────────────────────────────────────────────

pub struct InterfaceComposition;

trait Reader {
    fn read(&mut self) -> Option<String>;
}

trait Writer {
    fn write(&mut self, data: &str) -> usize;
}

/// Anything that can both read and write.
trait ReadWriter: Reader + Writer {}

impl<T: Reader + Writer> ReadWriter for T {}

#[derive(Default)]
struct Buffer {
    lines: Vec<String>,
}

impl Reader for Buffer {
    fn read(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.remove(0))
        }
    }
}

impl Writer for Buffer {
    fn write(&mut self, data: &str) -> usize {
        self.lines.push(data.to_string());
        data.len()
    }
}

fn copy_through(rw: &mut dyn ReadWriter, data: &[&str]) -> Vec<String> {
    let mut log = Vec::new();
    for d in data {
        log.push(format!("wrote {} bytes", rw.write(d)));
    }
    while let Some(line) = rw.read() {
        log.push(format!("read {line:?}"));
    }
    log
}

impl Demo for InterfaceComposition {
    fn run(&self, out: &mut dyn Renderer) {
        out.section(
            Section::Explanation,
            "COMPOSING INTERFACES\n\
             Small traits combine into bigger ones through supertraits. `trait \
             ReadWriter: Reader + Writer {}` means every ReadWriter is also a Reader \
             and a Writer. A blanket impl makes any type that has both parts \
             automatically qualify.",
        );
        out.section(
            Section::Code,
            r#"trait Reader { fn read(&mut self) -> Option<String>; }
trait Writer { fn write(&mut self, data: &str) -> usize; }

trait ReadWriter: Reader + Writer {}
impl<T: Reader + Writer> ReadWriter for T {}

#[derive(Default)]
struct Buffer { lines: Vec<String> }
impl Reader for Buffer { /* pop the oldest line */ }
impl Writer for Buffer { /* push a line */ }

let mut buf = Buffer::default();
let rw: &mut dyn ReadWriter = &mut buf;
for d in ["hello", "composition"] {
    println!("wrote {} bytes", rw.write(d));
}
while let Some(line) = rw.read() {
    println!("read {:?}", line);
}"#,
        );

        let mut buf = Buffer::default();
        let lines = copy_through(&mut buf, &["hello", "composition"]);
        out.section(Section::Output, &lines.join("\n"));

        out.section(
            Section::KeyTakeaways,
            "- Keep traits small and focused, then compose them\n\
             - Supertraits state requirements: ReadWriter needs Reader + Writer\n\
             - Blanket impls grant the composite trait for free",
        );
    }
}
