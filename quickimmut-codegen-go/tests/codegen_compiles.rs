//! Integration tests that verify generated code compiles and behaves.
//!
//! These tests generate Go code for several containers, add a small `main`
//! that drives the builders, and run it with `go run`. They need a Go
//! toolchain, so they are ignored by default: `cargo test -- --ignored`.

use quickimmut_codegen::testing::{GoChecker, assert_go_compiles, write_go_package};
use quickimmut_codegen_go::{ContainerCodegen, Generator};
use quickimmut_core::ContainerSpec;

const DRIVER: &str = r#"package main

import "fmt"

type Key string

type Valu struct {
	n int
}

type GroupingType struct{}

func main() {
	mb := StartKeyValuMap(1)
	mb.Append("a", &Valu{1})
	mb.Append("b", &Valu{2})
	mb.Append("a", &Valu{3})
	m := mb.Finish()
	fmt.Println(len(m.x), m.x["a"].n, m.x["b"].n, mb.x == nil)

	m2 := MakeKeyValuMap(MakeKeyValuMapEntry("z", &Valu{9}))
	fmt.Println(len(m2.x), m2.x["z"].n)

	lb := StartValuList(4)
	lb.Append(Valu{1})
	lb.Append(Valu{2})
	l := lb.Finish()
	fmt.Println(len(l.x), l.x[0].n, l.x[1].n, lb.x == nil)

	src := []Valu{{1}, {2}}
	c := MakeValuList(src...)
	src[0].n = 100
	fmt.Println(c.x[0].n)

	g := GroupingType{}
	gm := g.MakeStringIntMap(g.MakeStringIntMapEntry("k", 5))
	gb := g.StartStringIntMap(0)
	gb.Append("q", 6)
	fmt.Println(gm.x["k"], gb.Finish().x["q"])

	il := MakeIntList(1, 2, 3)
	fmt.Println(len(il.x))
}
"#;

fn generated_file() -> String {
    let specs = [
        ContainerSpec::map("Key", "*Valu"),
        ContainerSpec::list("Valu"),
        ContainerSpec::map("string", "int").attach_to("GroupingType"),
        ContainerSpec::list("int").exported(true),
    ];
    format!("package main\n{}", Generator::new().render_all(&specs))
}

#[test]
#[ignore = "needs a go toolchain on PATH; run with --ignored"]
fn test_generated_code_compiles() {
    let generated = generated_file();
    assert_go_compiles(&[("gen.go", generated.as_str()), ("main.go", DRIVER)])
        .expect("generated code should compile");
}

#[test]
#[ignore = "needs a go toolchain on PATH; run with --ignored"]
fn test_builders_round_trip() {
    let generated = generated_file();
    let dir = write_go_package(&[("gen.go", generated.as_str()), ("main.go", DRIVER)])
        .expect("Failed to write Go package");
    let stdout = GoChecker
        .run(dir.path())
        .unwrap_or_else(|e| panic!("go run failed:\n{}\n\n{}", e, generated));

    // Last write wins per key; builders are spent after Finish; list order is
    // kept; the list constructor doesn't alias the caller's slice.
    assert_eq!(stdout, "2 3 2 true\n1 9\n2 1 2 true\n1\n5 6\n3\n");
}
