use crate::config::ImageRefConfig;
use crate::error::TagError;
use crate::rewrite;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};
use regex::{NoExpand, Regex};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Replaces every match of `pattern` in `text` with `new_ref`, taken literally.
#[must_use]
pub fn rewrite_image_refs(text: &str, pattern: &Regex, new_ref: &str) -> (String, usize) {
    let count = pattern.find_iter(text).count();
    let rewritten = pattern.replace_all(text, NoExpand(new_ref)).into_owned();
    (rewritten, count)
}

/// Points every configured file under `root` at `tag`. Stops at the first
/// file that cannot be read or written.
pub fn update_tags(
    root: &Path,
    config: &ImageRefConfig,
    tag: &str,
) -> Result<Vec<FileUpdate>, TagError> {
    let pattern = config.pattern()?;
    let new_ref = config.image_ref(tag);
    println!("New Image Ref to write: {}", new_ref.cyan());

    let mut updates = Vec::with_capacity(config.files.len());
    for file in &config.files {
        println!("Updating {}...", file.display());
        let path = root.join(file);

        let text = rewrite::read_text(&path)?;
        let (rewritten, replacements) = rewrite_image_refs(&text, &pattern, &new_ref);
        rewrite::write_atomic(&path, rewritten.as_bytes())?;

        log::debug!("{}: {replacements} image refs", path.display());
        if replacements == 0 {
            log::warn!("no {} reference found in {}", config.image, file.display());
        }

        updates.push(FileUpdate {
            path: file.clone(),
            replacements,
        });
    }

    Ok(updates)
}

pub fn print_updates(updates: &[FileUpdate]) {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["File", "Refs Replaced"]);

    for update in updates {
        table.add_row(vec![
            Cell::new(update.path.display()),
            Cell::new(update.replacements).fg(if update.replacements == 0 {
                Color::Yellow
            } else {
                Color::Green
            }),
        ]);
    }

    let total: usize = updates.iter().map(|u| u.replacements).sum();
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
}
