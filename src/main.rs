// src/main.rs
use anyhow::Context;
use blog_admin_client::{
    api::ApiClient,
    cache::{LoadOutcome, ReferenceCache},
    config::{self, settings::normalize_base_url, Config},
    error::ClientError,
    models::{
        Article, ArticleFilter, ArticleStatus, Author, Category, CommentFilter, SearchScope,
    },
    presentation::{activity_level, format_date, status_badge, truncate_text},
    ui::{self, ActionElement, Notice, Page, DEFAULT_ERROR_ELEMENT},
    utils::setup_logging,
};
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const TITLE_WIDTH: usize = 60;
const SNIPPET_WIDTH: usize = 80;

#[derive(Parser, Debug)]
#[command(name = "blog-admin", version, about = "Terminal front end for the blog admin API")]
struct Cli {
    /// API root, e.g. http://localhost:8000 (overrides BLOG_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// error, warn, info, debug or trace (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all authors
    Authors,
    /// List all categories
    Categories,
    /// List articles, optionally filtered
    Articles {
        #[arg(long)]
        status: Option<ArticleStatus>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// List comments, optionally filtered
    Comments {
        #[arg(long)]
        article: Option<String>,
        #[arg(long)]
        approved: Option<bool>,
    },
    /// Per-author activity summary
    Activity,
    /// Blog-wide statistics
    Stats,
    /// Search articles and comments
    Search {
        query: String,
        #[arg(long = "in", default_value = "all")]
        scope: SearchScope,
    },
}

/// The terminal has no notice elements, so errors go through `alert`.
struct TerminalPage;

impl Page for TerminalPage {
    fn notice_mut(&mut self, _element_id: &str) -> Option<&mut Notice> {
        None
    }

    fn alert(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes" | "да"),
            Err(_) => false,
        }
    }

    fn action_elements(&self) -> Vec<ActionElement> {
        Vec::new()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    let env_config = Config::from_env();
    let level = cli
        .log_level
        .as_deref()
        .and_then(|l| l.parse().ok())
        .unwrap_or_else(|| env_config.log_level_filter());
    setup_logging(level).context("Failed to initialize logging")?;

    let app_config = match cli.base_url.as_deref() {
        Some(base_url) => {
            let overridden = Config {
                api_base_url: normalize_base_url(base_url),
                ..env_config
            };
            config::validate(&overridden)?;
            overridden.validate_and_log();
            Arc::new(overridden)
        }
        None => config::load_config()?,
    };

    let client = Arc::new(ApiClient::new(&app_config)?);
    let cache = ReferenceCache::new(client.clone());

    if let Err(err) = run(cli.command, &client, &cache).await {
        ui::show_error(&mut TerminalPage, &err.to_string(), DEFAULT_ERROR_ELEMENT);
        return Err(err.into());
    }
    Ok(())
}

async fn run(
    command: Command,
    client: &ApiClient,
    cache: &ReferenceCache<Arc<ApiClient>>,
) -> Result<(), ClientError> {
    match command {
        Command::Authors => {
            let authors: Vec<Author> = loaded(cache.authors().await, "authors")?;
            for author in authors {
                println!(
                    "{:<30} {:<30} {}",
                    author.full_name,
                    author.email,
                    format_date(author.registration_date.as_deref())
                );
            }
        }
        Command::Categories => {
            let categories: Vec<Category> = loaded(cache.categories().await, "categories")?;
            for category in categories {
                println!(
                    "{:<30} {}",
                    category.name,
                    truncate_text(category.description.as_deref().unwrap_or("-"), SNIPPET_WIDTH)
                );
            }
        }
        Command::Articles {
            status,
            author,
            category,
        } => {
            let filter = ArticleFilter {
                status,
                author_id: author,
                category_id: category,
            };
            // Unfiltered listings are the cached reference list.
            let articles: Vec<Article> = if filter == ArticleFilter::default() {
                loaded(cache.articles().await, "articles")?
            } else {
                client.articles(&filter).await?
            };
            if articles.is_empty() {
                println!("No articles.");
            }
            for article in &articles {
                print_article(article);
            }
        }
        Command::Comments { article, approved } => {
            let filter = CommentFilter {
                article_id: article,
                is_approved: approved,
            };
            let comments = client.comments(&filter).await?;
            if comments.is_empty() {
                println!("No comments.");
            }
            for comment in comments {
                println!(
                    "[{}] {} on \"{}\" ({}): {}",
                    if comment.is_approved { "✓" } else { " " },
                    comment.author_name,
                    comment.article_title.as_deref().unwrap_or("-"),
                    format_date(comment.created_at.as_deref()),
                    truncate_text(&comment.content, SNIPPET_WIDTH)
                );
            }
        }
        Command::Activity => {
            for row in client.author_activity().await? {
                let level = activity_level(row.published_articles_count, row.total_comments_count);
                println!(
                    "{:<30} articles: {:>3}  comments: {:>4}  activity: {}",
                    row.author_name, row.published_articles_count, row.total_comments_count, level
                );
            }
        }
        Command::Stats => {
            let stats = client.statistics().await?;
            println!("Articles:   {} ({}% published)", stats.total_articles, stats.published_percentage);
            println!("  published {}", stats.total_published);
            println!("  moderated {}", stats.total_moderation);
            println!("  drafts    {}", stats.total_drafts);
            println!("Authors:    {}", stats.total_authors);
            println!(
                "Comments:   {} ({} approved)",
                stats.total_comments, stats.total_approved_comments
            );
            for category in &stats.categories_distribution {
                println!("  {:<28} {}", category.name, category.count);
            }
        }
        Command::Search { query, scope } => {
            let results = client.search(&query, scope).await?;
            if let Some(articles) = &results.articles {
                println!("Articles ({}):", articles.len());
                for article in articles {
                    print_article(article);
                }
            }
            if let Some(comments) = &results.comments {
                println!("Comments ({}):", comments.len());
                for comment in comments {
                    println!(
                        "  {}: {}",
                        comment.author_name,
                        truncate_text(&comment.content, SNIPPET_WIDTH)
                    );
                }
            }
        }
    }
    Ok(())
}

fn loaded<T: serde::de::DeserializeOwned>(
    outcome: LoadOutcome,
    what: &str,
) -> Result<Vec<T>, ClientError> {
    if let LoadOutcome::Empty = outcome {
        info!("API returned no {}", what);
    }
    outcome.decode()
}

fn print_article(article: &Article) {
    let badge = status_badge(&article.status);
    println!(
        "{:<width$} {:<14} {:<24} {}",
        truncate_text(&article.title, TITLE_WIDTH),
        badge.text,
        article.author_name.as_deref().unwrap_or("Неизвестно"),
        format_date(article.created_at.as_deref()),
        width = TITLE_WIDTH + 3
    );
}
