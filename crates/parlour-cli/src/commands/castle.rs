use std::io;
use std::path::Path;

use log::info;

use parlour_castle::{CastleConfig, Catalog, Game, LineConsole};

pub fn run(seed: Option<u64>, catalog: Option<&Path>) -> Result<(), String> {
    let mut config = CastleConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = catalog {
        let loaded = Catalog::from_path(path)
            .map_err(|e| format!("failed to load catalog {}: {e}", path.display()))?;
        info!(
            "loaded catalog {}: {} clues, {} senses, {} rooms",
            path.display(),
            loaded.clues.len(),
            loaded.senses.len(),
            loaded.rooms.len()
        );
        config = config.with_catalog(loaded);
    }

    let mut game = Game::new(&config).map_err(|e| e.to_string())?;
    let mut console = LineConsole::new(io::stdin().lock(), io::stdout().lock());
    game.play(&mut console).map_err(|e| e.to_string())
}
