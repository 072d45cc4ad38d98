/*!

# Quick start with Google Forms

This example shows how to build the skill stack of a team end to end, using
Google Forms to collect the answers. Other providers (Microsoft Forms,
Qualtrics) offer similar widgets.

**Creating the poll** Create a new form in Google Drive with one question to
identify the person (for example a short answer named `Username`, or turn on
"Collect email addresses" and use `Email Address` as the identifier column).

Then add one **Multiple Choice Grid** question per skill category. The name
of the question is the category (`Visual Design`, `Front End`, ...), the rows
are the sub-categories (`Typography`, `Color`, ...) and the columns are the
four levels: `High`, `Medium`, `Low`, `None`. Enable "Require a response in
each row": an empty answer stops the processing later on.

**Getting the results** After everybody answered, open the `Responses` tab
and use the `Create spreadsheet` option. Download the spreadsheet as CSV or
in the Excel format. The first columns are `Timestamp` and `Username`, the
other ones look like `Visual Design [Typography]`.

Run `skillstack` on the file (the name of the file may differ for you):

```bash
skillstack -i 'Design Team Stack Poll.csv'
```

For an Excel file:

```bash
skillstack -i 'Design Team Stack Poll.xlsx' --input-type xlsx
```

After running this command, you should see the stack of the team:

```text
[2019-03-04T09:55:59Z INFO  skill_profile] aggregate: processing 3 rows
[2019-03-04T09:55:59Z INFO  skill_profile] aggregate: 3 people, team profile over 2 categories
[2019-03-04T09:55:59Z INFO  skillstack::stack::render] Team Stack Average
[2019-03-04T09:55:59Z INFO  skillstack::stack::render]   Visual Design  (2.50)
[2019-03-04T09:55:59Z INFO  skillstack::stack::render]       3 Typography
[2019-03-04T09:55:59Z INFO  skillstack::stack::render]       2 Color
```

Use `--person alice` to display the stack of one person instead.

**Display the output** `skillstack` can write a JSON summary with the profile
of every person, the configuration of the radar chart and the bars of the
category breakdown. This is controled with the `--out` flag:

```bash
skillstack -i 'Design Team Stack Poll.csv' --out stack.json
```

If the column with the names of the people is not called `Username`, pass it
with `--identifier-column 'Email Address'`. See the
[manual](../manual/index.html) for the configuration file and the exact
rules of the computation.

*/
