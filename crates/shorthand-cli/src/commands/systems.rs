//! `shorthand systems` -- list the supported shorthand systems.

use shorthand_types::ShorthandSystem;

/// Print every system with its description and learning profile.
pub fn run() {
    for system in ShorthandSystem::ALL {
        let info = system.info();
        println!("{} ({})", info.name, system);
        println!("  {}", info.description);
        println!("  Difficulty:     {}", info.difficulty);
        println!("  Learning time:  {}", info.avg_learning_time);
        println!("  Features:       {}", info.characteristics.join(", "));
        println!("  Used by:        {}", info.used_by.join(", "));
        println!();
    }
}
