use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use slideshare::{
    ApiConfig, CheckFavorite, Credentials, DeleteSlideshow, EditSlideshow, FavoriteSlideshow,
    FileFormat, FileType, GetSlideshow, GetSlideshowsByGroup, GetSlideshowsByTag,
    GetSlideshowsByUser, GetUserContacts, GetUserGroups, GetUserTags, Language, PrivacySettings,
    Protocol, Proxy, SearchSlideshows, SlideshareApi, SortOrder, UploadDate, UploadSlideshow,
    UploadSource,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slideshare-cli")]
#[command(about = "Command line client for the SlideShare API", long_about = None)]
struct Cli {
    /// API key (can also be set via SLIDESHARE_API_KEY env var)
    #[arg(long, env = "SLIDESHARE_API_KEY")]
    api_key: String,

    /// Shared secret (can also be set via SLIDESHARE_SHARED_SECRET env var)
    #[arg(long, env = "SLIDESHARE_SHARED_SECRET", hide_env_values = true)]
    shared_secret: String,

    /// http or https
    #[arg(long, env = "SLIDESHARE_PROTOCOL", default_value = "https")]
    protocol: Protocol,

    #[command(flatten)]
    proxy: ProxyArgs,

    #[command(flatten)]
    account: AccountArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProxyArgs {
    /// Proxy host
    #[arg(long, env = "SLIDESHARE_PROXY_HOST")]
    proxy_host: Option<String>,

    /// Proxy port (defaults to 8080)
    #[arg(long, env = "SLIDESHARE_PROXY_PORT")]
    proxy_port: Option<u16>,

    /// Proxy user
    #[arg(long, env = "SLIDESHARE_PROXY_USER")]
    proxy_user: Option<String>,

    /// Proxy password
    #[arg(long, env = "SLIDESHARE_PROXY_PASS", hide_env_values = true)]
    proxy_pass: Option<String>,
}

#[derive(Args)]
struct AccountArgs {
    /// SlideShare username, for calls acting on an account
    #[arg(long, env = "SLIDESHARE_USERNAME")]
    username: Option<String>,

    /// SlideShare password, for calls acting on an account
    #[arg(long, env = "SLIDESHARE_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl AccountArgs {
    fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        }
    }

    fn require(&self) -> Result<Credentials, Box<dyn std::error::Error>> {
        self.credentials()
            .ok_or_else(|| "this command needs --username and --password".into())
    }
}

#[derive(Args)]
struct Paging {
    /// Maximum number of results
    #[arg(short, long)]
    limit: Option<u32>,

    /// Number of results to skip
    #[arg(short, long)]
    offset: Option<u32>,
}

#[derive(Args)]
struct Privacy {
    /// Make the slideshow private
    #[arg(long)]
    make_private: Option<bool>,

    /// Generate a secret URL (needs --make-private)
    #[arg(long)]
    generate_secret_url: Option<bool>,

    /// Allow embedding (needs --make-private)
    #[arg(long)]
    allow_embeds: Option<bool>,

    /// Share with contacts (needs --make-private)
    #[arg(long)]
    share_with_contacts: Option<bool>,
}

impl From<&Privacy> for PrivacySettings {
    fn from(p: &Privacy) -> Self {
        PrivacySettings {
            make_private: p.make_private,
            generate_secret_url: p.generate_secret_url,
            allow_embeds: p.allow_embeds,
            share_with_contacts: p.share_with_contacts,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get a slideshow by ID or URL
    Get {
        /// Slideshow ID, or its URL when it starts with http
        id_or_url: String,

        /// Include detailed fields
        #[arg(short, long)]
        detailed: bool,

        /// Leave tags out
        #[arg(long)]
        exclude_tags: bool,
    },
    /// List slideshows by tag
    ByTag {
        tag: String,
        #[command(flatten)]
        paging: Paging,
        #[arg(short, long)]
        detailed: bool,
    },
    /// List slideshows by group
    ByGroup {
        group_name: String,
        #[command(flatten)]
        paging: Paging,
        #[arg(short, long)]
        detailed: bool,
    },
    /// List slideshows by user
    ByUser {
        username_for: String,
        #[command(flatten)]
        paging: Paging,
        #[arg(short, long)]
        detailed: bool,
        /// Include slideshows that are not converted yet
        #[arg(long)]
        unconverted: bool,
    },
    /// Search slideshows
    Search {
        /// Search query
        query: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        items_per_page: Option<u32>,
        /// Language code, ** for all
        #[arg(long)]
        lang: Option<Language>,
        /// relevance, mostviewed, mostdownloaded or latest
        #[arg(long)]
        sort: Option<SortOrder>,
        /// any, week, month or year
        #[arg(long)]
        upload_date: Option<UploadDate>,
        /// Search tags only
        #[arg(long)]
        tags_only: bool,
        /// Only downloadable slideshows
        #[arg(long)]
        downloadable: bool,
        #[arg(long)]
        file_format: Option<FileFormat>,
        #[arg(long)]
        file_type: Option<FileType>,
        /// Only Creative Commons licensed slideshows
        #[arg(long)]
        cc: bool,
        #[arg(short, long)]
        detailed: bool,
    },
    /// List the groups of a user
    Groups { username_for: String },
    /// List the contacts of a user
    Contacts {
        username_for: String,
        #[command(flatten)]
        paging: Paging,
    },
    /// List the tags of the account
    Tags,
    /// Edit a slideshow of the account
    Edit {
        slideshow_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
        #[command(flatten)]
        privacy: Privacy,
    },
    /// Delete a slideshow of the account
    Delete { slideshow_id: String },
    /// Upload a file, or a URL the service fetches
    Upload {
        title: String,
        /// Local file to upload
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        file: Option<PathBuf>,
        /// Public URL of the file to upload
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
        /// Let visitors download the source file
        #[arg(long)]
        make_src_public: Option<bool>,
        #[command(flatten)]
        privacy: Privacy,
    },
    /// Favorite a slideshow
    Favorite { slideshow_id: String },
    /// Check whether a slideshow is a favorite
    CheckFavorite { slideshow_id: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::new(&cli.api_key, &cli.shared_secret).protocol(cli.protocol);
    if let Some(host) = &cli.proxy.proxy_host {
        config = config.proxy(Proxy::from_parts(
            host,
            cli.proxy.proxy_port,
            cli.proxy.proxy_user.as_deref(),
            cli.proxy.proxy_pass.as_deref(),
        )?);
    }
    let api = SlideshareApi::new(config)?;
    let account = &cli.account;

    match cli.command {
        Commands::Get {
            id_or_url,
            detailed,
            exclude_tags,
        } => {
            let target = if id_or_url.starts_with("http") {
                GetSlideshow::by_url(id_or_url)
            } else {
                GetSlideshow::by_id(id_or_url)
            };
            let options = GetSlideshow {
                credentials: account.credentials(),
                detailed: flag(detailed),
                exclude_tags: flag(exclude_tags),
                ..target
            };
            print_json(&api.get_slideshow(&options).await?)?;
        }
        Commands::ByTag {
            tag,
            paging,
            detailed,
        } => {
            let options = GetSlideshowsByTag {
                limit: paging.limit,
                offset: paging.offset,
                detailed: flag(detailed),
                ..GetSlideshowsByTag::new(tag)
            };
            print_json(&api.get_slideshows_by_tag(&options).await?)?;
        }
        Commands::ByGroup {
            group_name,
            paging,
            detailed,
        } => {
            let options = GetSlideshowsByGroup {
                limit: paging.limit,
                offset: paging.offset,
                detailed: flag(detailed),
                ..GetSlideshowsByGroup::new(group_name)
            };
            print_json(&api.get_slideshows_by_group(&options).await?)?;
        }
        Commands::ByUser {
            username_for,
            paging,
            detailed,
            unconverted,
        } => {
            let options = GetSlideshowsByUser {
                credentials: account.credentials(),
                limit: paging.limit,
                offset: paging.offset,
                detailed: flag(detailed),
                get_unconverted: flag(unconverted),
                ..GetSlideshowsByUser::new(username_for)
            };
            print_json(&api.get_slideshows_by_user(&options).await?)?;
        }
        Commands::Search {
            query,
            page,
            items_per_page,
            lang,
            sort,
            upload_date,
            tags_only,
            downloadable,
            file_format,
            file_type,
            cc,
            detailed,
        } => {
            let options = SearchSlideshows {
                page,
                items_per_page,
                lang,
                sort,
                upload_date,
                search_in_tags_only: flag(tags_only),
                restrict_to_downloadables: flag(downloadable),
                file_format,
                file_type,
                restrict_to_cc: flag(cc),
                detailed: flag(detailed),
                ..SearchSlideshows::new(query)
            };
            print_json(&api.search_slideshows(&options).await?)?;
        }
        Commands::Groups { username_for } => {
            let options = GetUserGroups {
                credentials: account.credentials(),
                ..GetUserGroups::new(username_for)
            };
            print_json(&api.get_user_groups(&options).await?)?;
        }
        Commands::Contacts {
            username_for,
            paging,
        } => {
            let options = GetUserContacts {
                limit: paging.limit,
                offset: paging.offset,
                ..GetUserContacts::new(username_for)
            };
            print_json(&api.get_user_contacts(&options).await?)?;
        }
        Commands::Tags => {
            let options = GetUserTags::new(account.require()?);
            print_json(&api.get_user_tags(&options).await?)?;
        }
        Commands::Edit {
            slideshow_id,
            title,
            description,
            tags,
            privacy,
        } => {
            let options = EditSlideshow {
                title,
                description,
                tags,
                privacy: (&privacy).into(),
                ..EditSlideshow::new(account.require()?, slideshow_id)
            };
            print_json(&api.edit_slideshow(&options).await?)?;
        }
        Commands::Delete { slideshow_id } => {
            let options = DeleteSlideshow::new(account.require()?, slideshow_id);
            print_json(&api.delete_slideshow(&options).await?)?;
        }
        Commands::Upload {
            title,
            file,
            url,
            description,
            tags,
            make_src_public,
            privacy,
        } => {
            let source = match (file, url) {
                (Some(path), _) => UploadSource::File(path),
                (None, Some(url)) => UploadSource::Url(url),
                (None, None) => return Err("either --file or --url is required".into()),
            };
            let options = UploadSlideshow {
                description,
                tags,
                make_src_public,
                privacy: (&privacy).into(),
                ..UploadSlideshow::new(account.require()?, title, source)
            };
            print_json(&api.upload_slideshow(&options).await?)?;
        }
        Commands::Favorite { slideshow_id } => {
            let options = FavoriteSlideshow::new(account.require()?, slideshow_id);
            print_json(&api.favorite_slideshow(&options).await?)?;
        }
        Commands::CheckFavorite { slideshow_id } => {
            let options = CheckFavorite::new(account.require()?, slideshow_id);
            print_json(&api.check_favorite(&options).await?)?;
        }
    }

    Ok(())
}
