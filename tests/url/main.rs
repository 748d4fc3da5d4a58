mod normalize_path;
mod parse_url_parts;
mod unparse_url;
