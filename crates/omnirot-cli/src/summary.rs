use console::Style;
use omnirot_core::config::RegistrationConfig;
use omnirot_core::io::report::ReportPaths;
use omnirot_core::math::{self, Mat3, Rows};
use omnirot_core::rotation::{GazeFraming, RotationCheck};
use omnirot_core::sweep::SweepResult;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    ok: Style,
    fail: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ok: Style::new().green(),
            fail: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }

    fn pass_fail(&self, ok: bool) -> console::StyledObject<&'static str> {
        if ok {
            self.ok.apply_to("OK")
        } else {
            self.fail.apply_to("FAILED")
        }
    }
}

pub fn print_rotation_check(framing: &GazeFraming, r: &Mat3, check: &RotationCheck) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Rotation Frame"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Framing"),
        s.ok.apply_to(framing)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Gaze"),
        s.value.apply_to(math::Triple(&math::normalize(&framing.gaze())))
    );
    for line in Rows(r).to_string().lines() {
        println!("  {:<14}{}", "", s.value.apply_to(line));
    }
    println!();

    println!("  {}", s.header.apply_to("Checks"));
    println!(
        "    {:<12}{:.6} {:.6} {:.6}  {}",
        s.label.apply_to("Norms"),
        check.row_norms[0],
        check.row_norms[1],
        check.row_norms[2],
        s.pass_fail(check.unit_rows())
    );
    println!(
        "    {:<12}{:.2e} {:.2e} {:.2e}  {}",
        s.label.apply_to("Dots"),
        check.row_dots[0],
        check.row_dots[1],
        check.row_dots[2],
        s.pass_fail(check.orthogonal())
    );
    println!(
        "    {:<12}{:.2e} {:.2e} {:.2e}  {}",
        s.label.apply_to("ex x ey-ez"),
        check.handedness_error[0],
        check.handedness_error[1],
        check.handedness_error[2],
        s.pass_fail(check.right_handed())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Det"),
        s.value.apply_to(format!("{:.6}", check.determinant))
    );
    println!();
}

pub fn print_sweep_summary(config: &RegistrationConfig, result: &SweepResult, paths: &ReportPaths) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Rotation Sweep"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Base"),
        s.path.apply_to(config.base.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Reference"),
        s.path.apply_to(config.reference.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Region"),
        s.value.apply_to(config.region)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "{:.2}..{:.2} deg, step {:.2}",
            config.sweep.start_deg(),
            config.sweep.end_deg(),
            config.sweep.step_deg
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Result"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Expected"),
        s.value.apply_to(format!("{:.2} deg", result.expected_angle_deg))
    );
    match result.minimum() {
        Some(best) => println!(
            "    {:<12}{}",
            s.label.apply_to("Minimum"),
            s.ok.apply_to(format!(
                "{:.2} deg (E = {:.6})",
                best.angle_deg, best.energy
            ))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Minimum"),
            s.fail.apply_to("no samples")
        ),
    }
    match result.gradient_zero_crossing() {
        Some(angle) => println!(
            "    {:<12}{}",
            s.label.apply_to("dE/dpsi = 0"),
            s.ok.apply_to(format!("{:.3} deg", angle))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("dE/dpsi = 0"),
            s.fail.apply_to("no sign change")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Output"));
    for path in [&paths.objective, &paths.derivatives, &paths.expected_angle] {
        println!("    {}", s.path.apply_to(path.display()));
    }
    println!();
}
