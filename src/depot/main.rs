use clap::Parser;
use colored::*;
use depot::api::Depot;
use depot::config::DepotConfig;
use depot::error::{DepotError, Result};
use depot::model::{MatchEntry, OnExists, SearchRequest};
use depot::store::fs::DirStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        match &e {
            DepotError::Ambiguous { query, candidates } => {
                eprintln!(
                    "{} '{}' matches more than one file:",
                    "Ambiguous:".yellow(),
                    query
                );
                for name in candidates {
                    eprintln!("  {}", name);
                }
                eprintln!("Repeat the request with a more specific name.");
            }
            _ => eprintln!("{} {}", "Error:".red(), e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_depot(&cli)?;

    match cli.command {
        Commands::Mkdir { name, strict } => handle_mkdir(&mut api, &name, strict),
        Commands::Rmdir { name } => handle_rmdir(&mut api, &name),
        Commands::Folders => handle_folders(&api),
        Commands::Ls { folder } => handle_ls(&api, &folder),
        Commands::Put {
            folder,
            file,
            keep_name,
        } => handle_put(&mut api, &folder, &file, keep_name),
        Commands::Get { folder, query, out } => handle_get(&api, &folder, &query, &out),
        Commands::Rm { folder, name } => handle_rm(&mut api, &folder, &name),
        Commands::Search { term, folder, page } => handle_search(&mut api, term, folder, page),
    }
}

fn init_depot(cli: &Cli) -> Result<Depot<DirStore>> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => ProjectDirs::from("com", "depot", "depot")
            .ok_or_else(|| DepotError::Store("could not determine data directory".into()))?
            .data_dir()
            .join("storage"),
    };

    let store = DirStore::open(&root)?;
    let config = DepotConfig::load(&root)?;
    let mut api = Depot::new(store, config);
    api.init_catalog()?;
    Ok(api)
}

fn handle_mkdir(api: &mut Depot<DirStore>, name: &str, strict: bool) -> Result<()> {
    let policy = if strict { OnExists::Error } else { OnExists::Ignore };
    api.create_folder(name, policy)?;
    println!("{} folder '{}'", "Created".green(), name);
    Ok(())
}

fn handle_rmdir(api: &mut Depot<DirStore>, name: &str) -> Result<()> {
    api.delete_folder(name)?;
    println!("{} folder '{}' and all its files", "Deleted".green(), name);
    Ok(())
}

fn handle_folders(api: &Depot<DirStore>) -> Result<()> {
    let folders = api.list_folders()?;
    if folders.is_empty() {
        println!("No folders.");
        return Ok(());
    }
    for folder in folders {
        println!("{}", folder);
    }
    Ok(())
}

fn handle_ls(api: &Depot<DirStore>, folder: &str) -> Result<()> {
    let files = api.list_files(folder)?;
    if files.is_empty() {
        println!("No files in '{}'.", folder);
        return Ok(());
    }
    for name in files {
        println!("{}", name);
    }
    Ok(())
}

fn handle_put(
    api: &mut Depot<DirStore>,
    folder: &str,
    file: &PathBuf,
    keep_name: bool,
) -> Result<()> {
    let content = std::fs::read(file).map_err(DepotError::Io)?;

    let source_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DepotError::InvalidRequest("source path has no filename".into()))?;

    // Stored names are opaque: a fresh id plus the source extension, unless
    // the caller wants the original name kept.
    let stored_name = if keep_name {
        source_name.to_string()
    } else {
        match file.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    };

    api.save_file(folder, &stored_name, &content)?;
    println!(
        "{} '{}' in folder '{}' as '{}'",
        "Stored".green(),
        source_name,
        folder,
        stored_name
    );
    Ok(())
}

fn handle_get(api: &Depot<DirStore>, folder: &str, query: &str, out: &PathBuf) -> Result<()> {
    let handle = api.resolve_file(folder, query)?;
    let content = api.read(&handle)?;
    let target = out.join(&handle.name);
    std::fs::write(&target, content).map_err(DepotError::Io)?;
    println!("{} '{}' -> {}", "Retrieved".green(), handle.name, target.display());
    Ok(())
}

fn handle_rm(api: &mut Depot<DirStore>, folder: &str, name: &str) -> Result<()> {
    api.delete_file(folder, name)?;
    println!("{} '{}' from folder '{}'", "Deleted".green(), name, folder);
    Ok(())
}

fn handle_search(
    api: &mut Depot<DirStore>,
    term: String,
    folder: Option<String>,
    page: usize,
) -> Result<()> {
    let mut req = SearchRequest::new(term)
        .page(page)
        .page_size(api.config().page_size);
    if let Some(folder) = folder {
        req = req.in_folder(folder);
    }

    let result = api.search(&req)?;

    if result.results.is_empty() && result.similar_files.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for entry in &result.results {
        match entry {
            MatchEntry::Local(name) => println!("{}", name),
            MatchEntry::Global { folder, name } => {
                println!("{}/{}", folder.cyan(), name)
            }
        }
    }

    if !result.similar_files.is_empty() {
        println!("{}", "Similar files:".dimmed());
        for name in &result.similar_files {
            println!("  {}", name.dimmed());
        }
    }

    if result.total_pages > 1 {
        let more = if result.has_more { ", more available" } else { "" };
        println!(
            "{}",
            format!(
                "page {}/{} ({} matches{})",
                result.current_page, result.total_pages, result.total_count, more
            )
            .dimmed()
        );
    }

    Ok(())
}
