//! Command implementations for the vaic-store CLI.
//!
//! Commands:
//! - summary: counts and sizes per collection
//! - list / export / import: move JSON in and out of the store
//! - update / delete: single-record maintenance
//! - reset: back to the built-in defaults

use super::Scope;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use vaic_store::{Collection, KeyValueStore, Patch, Store};

pub fn summary<K: KeyValueStore>(store: &Store<K>, json: bool) -> Result<()> {
    let summary = store.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "VAIC data store".bold().cyan());
    println!(
        "  namespace {} on {}",
        store.keys().namespace().white().bold(),
        store.backend().name()
    );
    println!();

    for collection in Collection::ALL {
        println!(
            "  {:<18} {:>6} records {:>10}",
            collection.label(),
            summary.count(collection).to_string().cyan(),
            format!("{} B", summary.bytes(collection)).dimmed()
        );
    }

    println!();
    println!(
        "  {:<18} {:>6} records {:>10}",
        "total".bold(),
        summary.total_records().to_string().green(),
        format!("{} B", summary.total_bytes()).dimmed()
    );
    println!(
        "  last updated {}",
        summary.last_updated.to_rfc3339().yellow()
    );

    Ok(())
}

/// JSON for one collection as the application sees it.
fn collection_json<K: KeyValueStore>(store: &Store<K>, collection: Collection) -> Result<String> {
    let text = match collection {
        Collection::Users => serde_json::to_string_pretty(store.get_users())?,
        Collection::Contests => serde_json::to_string_pretty(&store.get_contests())?,
        Collection::Challenges => serde_json::to_string_pretty(store.get_challenges())?,
        Collection::ContestAttempts => serde_json::to_string_pretty(store.get_contest_attempts())?,
        Collection::UserProgress => serde_json::to_string_pretty(store.get_user_progress())?,
        Collection::Events => serde_json::to_string_pretty(store.get_events())?,
        Collection::ForumTopics => serde_json::to_string_pretty(store.get_forum_topics())?,
    };
    Ok(text)
}

pub fn list<K: KeyValueStore>(store: &Store<K>, collection: Collection) -> Result<()> {
    println!("{}", collection_json(store, collection)?);
    Ok(())
}

pub fn export<K: KeyValueStore>(store: &Store<K>, scope: Scope, output: Option<&Path>) -> Result<()> {
    let text = match scope {
        Scope::All => store.export_data()?,
        Scope::Users => store.export_users()?,
        Scope::Contests => store.export_contests()?,
        Scope::Events => store.export_events()?,
        Scope::Forum => store.export_forum()?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Cannot write export file: {}", path.display()))?;
            eprintln!(
                "  {} Exported {:?} to {}",
                "✓".green(),
                scope,
                path.display()
            );
        }
        None => println!("{}", text),
    }

    Ok(())
}

pub fn import<K: KeyValueStore>(store: &mut Store<K>, scope: Scope, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Cannot read import file: {}", file.display()))?;

    let imported = match scope {
        Scope::All => store.import_data(&text),
        Scope::Users => store.import_users(&text),
        Scope::Contests => store.import_contests(&text),
        Scope::Events => store.import_events(&text),
        Scope::Forum => store.import_forum(&text),
    };

    if !imported {
        bail!(
            "{} does not contain valid {:?} data; nothing was changed",
            file.display(),
            scope
        );
    }

    println!("  {} Imported {:?} from {}", "✓".green(), scope, file.display());
    Ok(())
}

fn record_exists<K: KeyValueStore>(store: &Store<K>, collection: Collection, id: &str) -> bool {
    match collection {
        Collection::Users => store.get_users().iter().any(|r| r.id == id),
        Collection::Contests => store.find_contest(id).is_some(),
        Collection::Challenges => store.get_challenges().iter().any(|r| r.id == id),
        Collection::ContestAttempts => store.get_contest_attempts().iter().any(|r| r.id == id),
        Collection::UserProgress => store.get_user_progress().iter().any(|r| r.id == id),
        Collection::Events => store.get_events().iter().any(|r| r.id == id),
        Collection::ForumTopics => store.get_forum_topics().iter().any(|r| r.id == id),
    }
}

pub fn update<K: KeyValueStore>(
    store: &mut Store<K>,
    collection: Collection,
    id: &str,
    patch: &str,
) -> Result<()> {
    let patch = Patch::from_json(patch).context("Patch must be a JSON object")?;

    if !record_exists(store, collection, id) {
        println!("{}", format!("No {} record with id '{}'", collection, id).yellow());
        return Ok(());
    }

    let applied = match collection {
        Collection::Users => store.update_user(id, &patch),
        Collection::Contests => store.update_contest(id, &patch),
        Collection::Challenges => store.update_challenge(id, &patch),
        Collection::ContestAttempts => store.update_contest_attempt(id, &patch),
        Collection::UserProgress => store.update_user_progress(id, &patch),
        Collection::Events => store.update_event(id, &patch),
        Collection::ForumTopics => store.update_forum_topic(id, &patch),
    };

    if !applied {
        bail!("Patch was rejected for {} '{}'; see log for details", collection, id);
    }

    println!("  {} Updated {} '{}'", "✓".green(), collection, id);
    Ok(())
}

pub fn delete<K: KeyValueStore>(store: &mut Store<K>, collection: Collection, id: &str) -> Result<()> {
    if !collection.supports_delete() {
        bail!("{} are append-only and cannot be deleted", collection);
    }

    if !record_exists(store, collection, id) {
        println!("{}", format!("No {} record with id '{}'", collection, id).yellow());
        return Ok(());
    }

    match collection {
        Collection::Users => store.delete_user(id),
        Collection::Contests => {
            let challenges = store.challenges_for_contest(id).len();
            store.delete_contest(id);
            println!("  {} Removed {} challenge(s) with it", "✓".green(), challenges);
        }
        Collection::Challenges => store.delete_challenge(id),
        Collection::Events => store.delete_event(id),
        Collection::ForumTopics => store.delete_forum_topic(id),
        Collection::ContestAttempts | Collection::UserProgress => {
            bail!("{} are append-only and cannot be deleted", collection)
        }
    }

    println!("  {} Deleted {} '{}'", "✓".green(), collection, id);
    Ok(())
}

pub fn reset<K: KeyValueStore>(store: &mut Store<K>, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{}",
            "WARNING: This replaces every stored record with the built-in defaults!".yellow()
        );
        println!("Re-run with {} to continue.", "--yes".cyan());
        return Ok(());
    }

    store.reset();
    println!("  {} All data has been reset to defaults", "✓".green());
    Ok(())
}
