use crate::Examples::equilibrium_examples::equilibrium_examples;
use crate::Thermochemistry::Calculations::MgNdEquilibria;
use std::io::{self, Write};
use std::path::Path;

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => equilibria_report(),
            "2" => hydride_report(),
            "3" => export_csv(),
            "4" => plots_menu(),
            "5" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_main_menu() {
    println!(
        "\x1b[34m\n Mg-Nd thermochemistry: equilibria of magnesiothermic Nd2O3 reduction\n
    and NdH2 precipitation from the Mg-Nd melt \n \x1b[0m"
    );
    println!("\x1b[33m1. Reduction equilibria report\x1b[0m");
    println!("\x1b[33m2. Hydride precipitation report\x1b[0m");
    println!("\x1b[33m3. Export spreadsheet (CSV)\x1b[0m");
    println!("\x1b[33m4. Terminal plots\x1b[0m");
    println!("\x1b[33m5. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}

fn equilibria_report() {
    match MgNdEquilibria::new() {
        Ok(eq) => {
            eq.pretty_print_dataset();
            eq.pretty_print_equilibria();
        }
        Err(e) => println!("dataset error: {}", e),
    }
}

fn hydride_report() {
    match MgNdEquilibria::new() {
        Ok(eq) => eq.pretty_print_hydride_summary(),
        Err(e) => println!("dataset error: {}", e),
    }
}

fn export_csv() {
    print!("\x1b[36mOutput file [Mg_Nd_Calculation_Output.csv]: \x1b[0m");
    io::stdout().flush().unwrap();
    let input = get_user_input();
    let name = input.trim();
    let name = if name.is_empty() {
        "Mg_Nd_Calculation_Output.csv"
    } else {
        name
    };
    match MgNdEquilibria::new() {
        Ok(eq) => match eq.save_csv(Path::new(name)) {
            Ok(()) => println!("Data has been written to {}", name),
            Err(e) => println!("export failed: {}", e),
        },
        Err(e) => println!("dataset error: {}", e),
    }
}

fn plots_menu() {
    println!("\x1b[33m1. Activity and coefficients at 700 C\x1b[0m");
    println!("\x1b[33m2. Free energy vs composition at 700 C\x1b[0m");
    println!("\x1b[33m3. Equilibrium composition vs temperature\x1b[0m");
    println!("\x1b[33m4. Hydride equilibrium vs H2 pressure at 695 C\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
    let choice = get_user_input();
    let eq = match MgNdEquilibria::new() {
        Ok(eq) => eq,
        Err(e) => {
            println!("dataset error: {}", e);
            return;
        }
    };
    let outcome = match choice.trim() {
        "1" => eq.plot_activity_in_terminal(700.0),
        "2" => eq.plot_delta_G_in_terminal(700.0),
        "3" => {
            eq.plot_equilibrium_vs_temperature_in_terminal();
            Ok(())
        }
        "4" => eq.plot_hydride_sweep_in_terminal(695.0),
        _ => {
            println!("Invalid choice.");
            Ok(())
        }
    };
    if let Err(e) = outcome {
        println!("plot failed: {}", e);
    }
}

fn examples_menu() {
    print!("\x1b[36mEnter task number (0-6): \x1b[0m");
    io::stdout().flush().unwrap();
    let choice = get_user_input();
    match choice.trim().parse::<usize>() {
        Ok(task) => equilibrium_examples(task),
        Err(_) => println!("Invalid task number."),
    }
}
